//! Reducer logic for the catalog.
//!
//! The catalog reducer never validates and never fails: form validation
//! happens before an action is sent, and an update or delete naming an
//! unknown id simply changes nothing.

use crate::types::{CatalogAction, CatalogState, Product};
use catalog_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Reducer for the product catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogReducer;

impl CatalogReducer {
    /// Creates a new `CatalogReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CatalogAction::Add(fields) => {
                let product = Product::from_new(state.next_id, fields);
                tracing::debug!(id = %product.id, "Adding product");
                state.products.insert(0, product);
                state.next_id = state.next_id.next();
            },

            CatalogAction::Update(product) => {
                match state.products.iter_mut().find(|p| p.id == product.id) {
                    Some(slot) => *slot = product,
                    None => tracing::debug!(id = %product.id, "Update ignored: no such product"),
                }
            },

            CatalogAction::Delete { id } => {
                state.products.retain(|p| p.id != id);
            },

            CatalogAction::Set(products) => {
                *state = CatalogState::with_products(products);
            },
        }

        SmallVec::new()
    }
}

/// Apply `action` to a copy of `state` and return the copy.
///
/// ```
/// use product_catalog::{transition, CatalogAction, ProductId};
///
/// let before = product_catalog::seed::sample_catalog();
/// let after = transition(&before, CatalogAction::Delete { id: ProductId::new(3) });
/// assert_eq!(before.count(), 10);
/// assert_eq!(after.count(), 9);
/// ```
#[must_use]
pub fn transition(state: &CatalogState, action: CatalogAction) -> CatalogState {
    catalog_core::transition(&CatalogReducer, state, action, &()).0
}

//! App-level composition of the catalog and the list page.
//!
//! The catalog reducer and the list-page reducer each own a slice of
//! [`AppState`]. They are scoped into the app and combined with a small
//! navigation reducer that handles the interactions between them:
//!
//! - relative page moves start from the page the user actually sees, which
//!   may be lower than the stored page after the result set shrank
//! - adding a product or replacing the collection returns the user to a
//!   fresh list, page 1 with no filters

use crate::list_page::{ListPageAction, ListPageReducer, ListPageState};
use crate::reducer::CatalogReducer;
use crate::types::{CatalogAction, CatalogState};
use catalog_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use catalog_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Everything the app keeps
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppState {
    /// The product collection
    pub catalog: CatalogState,
    /// List page controls
    pub list_page: ListPageState,
}

impl AppState {
    /// App state over `catalog` with a fresh list page
    #[must_use]
    pub const fn new(catalog: CatalogState, page_size: usize) -> Self {
        Self {
            catalog,
            list_page: ListPageState::new(page_size),
        }
    }
}

/// Everything the app can be asked to do
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// A catalog mutation
    Catalog(CatalogAction),
    /// A list page interaction
    ListPage(ListPageAction),
}

impl From<CatalogAction> for AppAction {
    fn from(action: CatalogAction) -> Self {
        Self::Catalog(action)
    }
}

impl From<ListPageAction> for AppAction {
    fn from(action: ListPageAction) -> Self {
        Self::ListPage(action)
    }
}

/// The composed app reducer type
pub type AppReducer = CombinedReducer<AppState, AppAction, ()>;

/// Cross-slice rules between the catalog and the list page
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::ListPage(page_action) if page_action.is_relative_move() => {
                let effective = state.list_page.view(&state.catalog.products).effective_page;
                state.list_page.page = effective;
                SmallVec::new()
            },
            AppAction::Catalog(CatalogAction::Add(_) | CatalogAction::Set(_)) => {
                smallvec![Effect::send(AppAction::ListPage(ListPageAction::Reset))]
            },
            AppAction::Catalog(_) | AppAction::ListPage(_) => SmallVec::new(),
        }
    }
}

/// Build the app reducer.
///
/// Order matters: the catalog commits first, navigation sees the committed
/// catalog, and the list page moves from the pinned page.
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            CatalogReducer::new(),
            |app: &AppState| &app.catalog,
            |app: &mut AppState, catalog| app.catalog = catalog,
            |action: AppAction| match action {
                AppAction::Catalog(a) => Some(a),
                AppAction::ListPage(_) => None,
            },
            AppAction::Catalog,
        )),
        Box::new(NavigationReducer),
        Box::new(scope_reducer(
            ListPageReducer::new(),
            |app: &AppState| &app.list_page,
            |app: &mut AppState, list_page| app.list_page = list_page,
            |action: AppAction| match action {
                AppAction::ListPage(a) => Some(a),
                AppAction::Catalog(_) => None,
            },
            AppAction::ListPage,
        )),
    ])
}

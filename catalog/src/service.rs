//! The catalog facade used by the presentation layer.
//!
//! [`ProductCatalog`] owns the app [`Store`] and turns page-level calls
//! (open a product, submit a form, click a filter) into validated actions.

use crate::app::{app_reducer, AppAction, AppReducer, AppState};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::list_page::ListPageAction;
use crate::query::ProductPage;
use crate::seed::sample_catalog;
use crate::types::{CatalogAction, CatalogState, Product, ProductId};
use crate::validation::ProductDraft;
use catalog_runtime::Store;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Product catalog with its list page
pub struct ProductCatalog {
    store: Store<AppState, AppAction, (), AppReducer>,
}

impl ProductCatalog {
    /// Catalog set up from `config`, seeded with the sample products if asked
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let catalog = if config.seed {
            sample_catalog()
        } else {
            CatalogState::new()
        };
        Self::with_catalog(catalog, config)
    }

    /// Catalog over an existing collection
    #[must_use]
    pub fn with_catalog(catalog: CatalogState, config: &CatalogConfig) -> Self {
        let state = AppState::new(catalog, config.page_size);
        Self {
            store: Store::with_config(state, app_reducer(), (), config.store_config()),
        }
    }

    /// The committed app state
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        self.store.snapshot()
    }

    /// Notified after every committed action
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.store.subscribe()
    }

    /// Number of products
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.state(|s| s.catalog.count())
    }

    /// One product, for the detail and edit pages
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    pub fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.store
            .state(|s| s.catalog.get(id).cloned())
            .ok_or(CatalogError::NotFound(id))
    }

    /// The edit form pre-filled for `id`
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id.
    pub fn draft(&self, id: ProductId) -> Result<ProductDraft, CatalogError> {
        self.product(id).map(|p| ProductDraft::from_product(&p))
    }

    /// Validate the add form and add the product.
    ///
    /// On success the list page is reset to a fresh first page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] listing every bad field, or
    /// [`CatalogError::Store`] if the store rejects the dispatch.
    pub fn create(&self, draft: &ProductDraft) -> Result<ProductId, CatalogError> {
        let fields = draft.validate().inspect_err(|errors| {
            warn!(%errors, "Rejected new product");
        })?;

        let id = self.store.state(|s| s.catalog.next_id);
        self.store.send(AppAction::Catalog(CatalogAction::Add(fields)))?;

        info!(%id, "Product created");
        Ok(id)
    }

    /// Validate the edit form and replace product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] before looking at the form when the
    /// id is unknown, then [`CatalogError::Validation`] for bad fields.
    pub fn edit(&self, id: ProductId, draft: &ProductDraft) -> Result<(), CatalogError> {
        if !self.store.state(|s| s.catalog.contains(id)) {
            return Err(CatalogError::NotFound(id));
        }

        let fields = draft.validate().inspect_err(|errors| {
            warn!(%id, %errors, "Rejected product edit");
        })?;

        self.store
            .send(AppAction::Catalog(CatalogAction::Update(Product::from_new(id, fields))))?;

        info!(%id, "Product updated");
        Ok(())
    }

    /// Delete product `id`; unknown ids change nothing
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if the store rejects the dispatch.
    pub fn remove(&self, id: ProductId) -> Result<(), CatalogError> {
        self.store.send(AppAction::Catalog(CatalogAction::Delete { id }))?;
        info!(%id, "Product removed");
        Ok(())
    }

    /// Replace the whole collection
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if the store rejects the dispatch.
    pub fn replace_all(&self, products: Vec<Product>) -> Result<(), CatalogError> {
        let count = products.len();
        self.store.send(AppAction::Catalog(CatalogAction::Set(products)))?;
        info!(count, "Catalog replaced");
        Ok(())
    }

    /// Replace the collection with a JSON array of products
    ///
    /// Returns how many products were imported.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Import`] when `json` is not a product array;
    /// the catalog is left unchanged.
    pub fn import_json(&self, json: &str) -> Result<usize, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let count = products.len();
        self.replace_all(products)?;
        Ok(count)
    }

    /// The collection as a pretty-printed JSON array
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Import`] if serialization fails.
    pub fn export_json(&self) -> Result<String, CatalogError> {
        self.store
            .state(|s| serde_json::to_string_pretty(&s.catalog.products))
            .map_err(CatalogError::from)
    }

    /// Apply a list page interaction
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] if the store rejects the dispatch.
    pub fn list(&self, action: ListPageAction) -> Result<(), CatalogError> {
        self.store.send(AppAction::ListPage(action))?;
        Ok(())
    }

    /// The list page as currently shown
    #[must_use]
    pub fn view(&self) -> ProductPage {
        self.store
            .state(|s| s.list_page.view(&s.catalog.products).into())
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

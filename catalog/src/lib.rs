//! Product catalog with a searchable, paginated list page.
//!
//! The catalog keeps an ordered collection of products, newest first, and
//! changes only through [`CatalogAction`]s applied by a reducer. The list
//! page derives what the user sees with a pure view query: name search,
//! category filter, price range, then pagination.
//!
//! - [`transition`] applies one action to a copy of the catalog
//! - [`query::compute_view`] computes the visible page
//! - [`ProductCatalog`] wraps both in a store with form validation
//!
//! # Quick Start
//!
//! ```
//! use product_catalog::{Category, ListPageAction, ProductCatalog, ProductDraft};
//!
//! # fn example() -> Result<(), product_catalog::CatalogError> {
//! let catalog = ProductCatalog::default();
//!
//! let id = catalog.create(&ProductDraft {
//!     name: "Test".to_string(),
//!     category: Some(Category::Books),
//!     price: "50000".to_string(),
//!     quantity: "5".to_string(),
//!     description: String::new(),
//! })?;
//!
//! catalog.list(ListPageAction::SelectCategory(Some(Category::Books)))?;
//! let page = catalog.view();
//! assert_eq!(page.products[0].id, id);
//! assert_eq!(page.total_count, 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod list_page;
pub mod numeric;
pub mod query;
pub mod reducer;
pub mod seed;
pub mod service;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use app::{app_reducer, AppAction, AppState};
pub use config::{CatalogConfig, ConfigError};
pub use error::CatalogError;
pub use format::format_currency;
pub use list_page::{ListPageAction, ListPageState};
pub use query::{compute_view, ProductPage, ProductView, ViewParams};
pub use reducer::{transition, CatalogReducer};
pub use service::ProductCatalog;
pub use types::{CatalogAction, CatalogState, Category, NewProduct, Product, ProductId};
pub use validation::{Field, ProductDraft, ValidationErrors};

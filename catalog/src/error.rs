//! Errors surfaced by the catalog facade.

use crate::types::ProductId;
use crate::validation::ValidationErrors;
use catalog_runtime::StoreError;
use thiserror::Error;

/// Failures of [`ProductCatalog`](crate::service::ProductCatalog) calls
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No product has this id
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// The submitted form has invalid fields
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),

    /// Imported or exported JSON was not a product list
    #[error("Product JSON error: {0}")]
    Import(#[from] serde_json::Error),

    /// The store refused to run the action
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Whether the caller should show a "not found" page
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Field errors, when the failure was a rejected form
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

//! Storefront error types.

use thiserror::Error;

use crate::catalog::ProductId;

/// Errors that can occur in storefront operations.
///
/// The taxonomy is deliberately narrow: queries over the catalog never
/// fail, and wishlist persistence degrades rather than erroring, so
/// only catalog loading and explicit product lookups are fallible.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Catalog data could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Persistence layer failure.
    #[error("Store error: {0}")]
    Store(#[from] atelier_store::StoreError),
}

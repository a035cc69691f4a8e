use common::ProductId;
use thiserror::Error;

/// Errors that can occur when maintaining the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A product with the same id is already in the catalog.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// Result type for catalog maintenance operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

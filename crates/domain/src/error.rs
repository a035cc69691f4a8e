//! Domain error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur when applying an order to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    /// An order line references a product the catalog does not hold.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A product has fewer units in stock than an order line requests.
    #[error("Insufficient stock for: {product_name}")]
    InsufficientStock { product_name: String },
}

//! Checkout error types.

use domain::StockError;
use thiserror::Error;

/// Errors that can occur during checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The customer has nothing in their cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The catalog rejected the order.
    #[error(transparent)]
    Stock(#[from] StockError),
}

impl CheckoutError {
    /// Short label used for the `reason` metric label.
    pub fn reason(&self) -> &'static str {
        match self {
            CheckoutError::EmptyCart => "empty_cart",
            CheckoutError::Stock(StockError::ProductNotFound(_)) => "product_not_found",
            CheckoutError::Stock(StockError::InsufficientStock { .. }) => "insufficient_stock",
        }
    }
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;

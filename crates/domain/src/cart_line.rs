//! A line in a customer's cart.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product snapshot and the quantity requested for it.
///
/// Name and unit price are copied when the line is first added and are not
/// refreshed if the catalog product changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product identifier.
    pub product_id: ProductId,

    /// Product name at the time it was added.
    pub product_name: String,

    /// Price per unit at the time it was added.
    pub unit_price: Money,

    /// Quantity requested.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new cart line.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns the line subtotal (unit_price * quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtotal() {
        let line = CartLine::new(1, "Mechanical Keyboard", Money::from_cents(29990), 5);
        assert_eq!(line.subtotal().cents(), 149950);
    }
}

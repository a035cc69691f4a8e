//! Order snapshot produced by checkout.

use chrono::{DateTime, Utc};
use common::{Money, OrderId};
use serde::{Deserialize, Serialize};

use crate::cart_line::CartLine;

/// Immutable record of what was purchased and at what price.
///
/// The total is computed once, on construction, from the line subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<CartLine>,
    total: Money,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from cart lines, stamped with the current time.
    pub fn new(id: OrderId, lines: Vec<CartLine>) -> Self {
        Self::with_timestamp(id, lines, Utc::now())
    }

    /// Builds an order with an explicit timestamp.
    pub fn with_timestamp(id: OrderId, lines: Vec<CartLine>, placed_at: DateTime<Utc>) -> Self {
        let total = lines.iter().map(CartLine::subtotal).sum();
        Self {
            id,
            lines,
            total,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the order lines in cart order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the sum of all line subtotals.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Returns the total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let order = Order::new(
            OrderId::FIRST,
            vec![
                CartLine::new(1, "Mechanical Keyboard", Money::from_cents(29990), 5),
                CartLine::new(2, "Gaming Mouse", Money::from_cents(14950), 2),
            ],
        );
        assert_eq!(order.total().cents(), 149950 + 29900);
        assert_eq!(order.total_quantity(), 7);
        assert_eq!(order.lines().len(), 2);
    }

    #[test]
    fn test_empty_order_has_zero_total() {
        let order = Order::new(OrderId::FIRST, vec![]);
        assert!(order.is_empty());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_placed_at_is_preserved() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let order = Order::with_timestamp(OrderId::new(9), vec![], at);
        assert_eq!(order.placed_at(), at);
        assert_eq!(order.id(), OrderId::new(9));
    }
}

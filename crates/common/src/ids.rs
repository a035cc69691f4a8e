use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Assigned by whoever seeds the catalog; the store never generates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a customer owning a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

impl CustomerId {
    /// Creates a customer ID from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a placed order.
///
/// Allocated by the store from a counter starting at 1. Ids are strictly
/// increasing but not gapless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// The first id handed out by a fresh store.
    pub const FIRST: OrderId = OrderId(1);

    /// Creates an order ID from its numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_preserves_value() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(ProductId::from(42), id);
    }

    #[test]
    fn order_id_next_increments() {
        assert_eq!(OrderId::FIRST.next(), OrderId::new(2));
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&CustomerId::new(7)).unwrap(), "7");
        let id: OrderId = serde_json::from_str("12").unwrap();
        assert_eq!(id, OrderId::new(12));
    }
}

//! Demo catalog loaded at server startup.

use common::Money;
use domain::Product;

/// Returns the three products the demo server starts with.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Mechanical Keyboard",
            "Backlit keyboard",
            Money::from_cents(29990),
            10,
        ),
        Product::new(
            2,
            "Gaming Mouse",
            "High-precision mouse",
            Money::from_cents(14950),
            5,
        ),
        Product::new(3, "24-inch Monitor", "Full HD 75Hz", Money::from_cents(89900), 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_have_unique_ids() {
        let products = demo_products();
        let mut ids: Vec<_> = products.iter().map(Product::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}

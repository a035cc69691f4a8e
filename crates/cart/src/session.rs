//! Cart aggregator keyed by customer id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::{CustomerId, Money, ProductId};
use domain::{CartLine, Product};

use crate::error::CartError;

/// Holds one cart per customer.
///
/// A cart is an ordered list of lines with at most one line per product.
/// All carts share a single lock, which is independent of the catalog's.
/// Cloning yields another handle to the same carts.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    carts: Arc<Mutex<HashMap<CustomerId, Vec<CartLine>>>>,
}

impl SessionManager {
    /// Creates an empty cart aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CustomerId, Vec<CartLine>>> {
        self.carts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `quantity` units of a product to the customer's cart.
    ///
    /// The cart is created if the customer has none. If the cart already has
    /// a line for the product its quantity is increased; the name and price
    /// recorded by the first add are kept.
    #[tracing::instrument(skip(self, product_name, unit_price))]
    pub fn add_to_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        let mut carts = self.lock();
        let cart = carts.entry(customer_id).or_default();
        match cart.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => cart.push(CartLine::new(
                product_id,
                product_name,
                unit_price,
                quantity,
            )),
        }

        metrics::counter!("cart_items_added_total").increment(u64::from(quantity));
        Ok(())
    }

    /// Adds a catalog product to the customer's cart, snapshotting its
    /// current name and price.
    pub fn add_product(
        &self,
        customer_id: CustomerId,
        product: &Product,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.add_to_cart(
            customer_id,
            product.id(),
            product.name(),
            product.price(),
            quantity,
        )
    }

    /// Returns a copy of the customer's cart lines.
    ///
    /// A customer without a cart gets an empty list; no cart is created.
    pub fn get_cart(&self, customer_id: CustomerId) -> Vec<CartLine> {
        self.lock().get(&customer_id).cloned().unwrap_or_default()
    }

    /// Returns the sum of the customer's line subtotals.
    pub fn cart_subtotal(&self, customer_id: CustomerId) -> Money {
        self.lock()
            .get(&customer_id)
            .map(|lines| lines.iter().map(CartLine::subtotal).sum::<Money>())
            .unwrap_or_default()
    }

    /// Removes the customer's cart. Clearing an absent cart is a no-op.
    pub fn clear_cart(&self, customer_id: CustomerId) {
        if self.lock().remove(&customer_id).is_some() {
            tracing::debug!(%customer_id, "cart cleared");
        }
    }

    /// Returns the number of customers with a cart.
    pub fn cart_count(&self) -> usize {
        self.lock().len()
    }
}

//! Checkout orchestration across the catalog and the cart aggregator.

use cart::SessionManager;
use catalog::Store;
use common::CustomerId;
use domain::Order;

use crate::error::{CheckoutError, Result};

/// Converts a customer's cart into an order.
///
/// The catalog and the cart aggregator keep their own locks and the service
/// never holds both. The cart is read, released, the order is applied to the
/// catalog, and the cart is locked again to clear it. An item added for the
/// same customer between the read and the clear is dropped by the clear.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    store: Store,
    sessions: SessionManager,
}

impl CheckoutService {
    /// Creates a checkout service over the given catalog and carts.
    pub fn new(store: Store, sessions: SessionManager) -> Self {
        Self { store, sessions }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Checks out the customer's cart.
    ///
    /// Fails with [`CheckoutError::EmptyCart`] before allocating an order id
    /// if the cart is empty. Otherwise an id is allocated and consumed even
    /// when the catalog then rejects the order; in that case the stock error
    /// is returned and the cart is kept so the customer can adjust it.
    #[tracing::instrument(skip(self))]
    pub fn checkout(&self, customer_id: CustomerId) -> Result<Order> {
        metrics::counter!("checkout_attempts_total").increment(1);
        let started = std::time::Instant::now();

        let result = self.run(customer_id);

        metrics::histogram!("checkout_duration_seconds").record(started.elapsed().as_secs_f64());
        match &result {
            Ok(order) => {
                metrics::counter!("checkout_completed_total").increment(1);
                tracing::info!(
                    order_id = %order.id(),
                    %customer_id,
                    total = %order.total(),
                    "checkout completed"
                );
            }
            Err(e) => {
                metrics::counter!("checkout_failed_total", "reason" => e.reason()).increment(1);
                tracing::warn!(%customer_id, error = %e, "checkout failed");
            }
        }
        result
    }

    fn run(&self, customer_id: CustomerId) -> Result<Order> {
        let lines = self.sessions.get_cart(customer_id);
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::new(self.store.next_order_id(), lines);
        self.store.place_order(&order)?;

        self.sessions.clear_cart(customer_id);
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Money, OrderId, ProductId};
    use domain::{Product, StockError};

    const CUSTOMER: CustomerId = CustomerId::new(1);

    fn service() -> CheckoutService {
        let store = Store::with_products([Product::new(
            1,
            "Mechanical Keyboard",
            "Backlit keyboard",
            Money::from_cents(29990),
            10,
        )])
        .unwrap();
        CheckoutService::new(store, SessionManager::new())
    }

    #[test]
    fn test_empty_cart_fails_without_allocating_id() {
        let service = service();
        assert_eq!(service.checkout(CUSTOMER), Err(CheckoutError::EmptyCart));
        assert_eq!(service.store().next_order_id(), OrderId::FIRST);
    }

    #[test]
    fn test_checkout_clears_cart() {
        let service = service();
        let product = service.store().find_by_id(ProductId::new(1)).unwrap();
        service.sessions().add_product(CUSTOMER, &product, 1).unwrap();

        let order = service.checkout(CUSTOMER).unwrap();

        assert_eq!(order.id(), OrderId::FIRST);
        assert!(service.sessions().get_cart(CUSTOMER).is_empty());
    }

    #[test]
    fn test_failure_keeps_cart() {
        let service = service();
        let product = service.store().find_by_id(ProductId::new(1)).unwrap();
        service.sessions().add_product(CUSTOMER, &product, 11).unwrap();

        let err = service.checkout(CUSTOMER).unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Stock(StockError::InsufficientStock { .. })
        ));
        assert_eq!(err.reason(), "insufficient_stock");
        assert_eq!(service.sessions().get_cart(CUSTOMER)[0].quantity, 11);
    }
}

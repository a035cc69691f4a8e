//! The catalog store and its order-processing operation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use common::{OrderId, ProductId};
use domain::{Order, Product, StockError};

use crate::error::{CatalogError, Result};

#[derive(Debug)]
struct StoreState {
    /// Products in insertion order.
    products: Vec<Product>,
    next_order_id: OrderId,
}

impl StoreState {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_order_id: OrderId::FIRST,
        }
    }
}

/// In-memory catalog and order processor.
///
/// Cloning a `Store` yields another handle to the same catalog. Every
/// operation runs under one exclusive lock, so a [`place_order`] call never
/// interleaves with another catalog read or write.
///
/// [`place_order`]: Store::place_order
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<StoreState>>,
}

impl Store {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let store = Self::new();
        for product in products {
            store.add_product(product)?;
        }
        Ok(store)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every critical section below leaves the state consistent before it
        // can panic, so a poisoned lock still guards valid data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a product into the catalog.
    ///
    /// Returns [`CatalogError::DuplicateProduct`] and leaves the catalog
    /// unchanged if a product with the same id already exists.
    pub fn add_product(&self, product: Product) -> Result<()> {
        let mut state = self.lock();
        if state.position(product.id()).is_some() {
            return Err(CatalogError::DuplicateProduct(product.id()));
        }
        tracing::debug!(product_id = %product.id(), name = product.name(), "product added");
        state.products.push(product);
        Ok(())
    }

    /// Looks up a product by id.
    pub fn find_by_id(&self, id: ProductId) -> Option<Product> {
        let state = self.lock();
        state.position(id).map(|i| state.products[i].clone())
    }

    /// Returns a snapshot of every product, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Returns the number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.lock().products.len()
    }

    /// Allocates the next order id.
    ///
    /// Ids start at 1 and strictly increase. An id is consumed even if the
    /// order it was allocated for is later rejected.
    pub fn next_order_id(&self) -> OrderId {
        let mut state = self.lock();
        let id = state.next_order_id;
        state.next_order_id = id.next();
        id
    }

    /// Applies an order's stock decrements to the catalog, all or nothing.
    ///
    /// Every line is validated first: a line naming an unknown product fails
    /// with [`StockError::ProductNotFound`], and a line asking for more units
    /// than are in stock fails with [`StockError::InsufficientStock`]. Lines
    /// for the same product are checked against their combined quantity.
    /// Stock is decremented only once every line has passed, and the whole
    /// sequence holds the store lock, so two concurrent orders cannot both
    /// claim the last units of a product.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    pub fn place_order(&self, order: &Order) -> std::result::Result<(), StockError> {
        let mut state = self.lock();

        // Pass 1: validate, accumulating the quantity requested per product.
        let mut requested: HashMap<usize, u32> = HashMap::new();
        for line in order.lines() {
            let index = state
                .position(line.product_id)
                .ok_or(StockError::ProductNotFound(line.product_id))?;
            let product = &state.products[index];

            let wanted = requested.entry(index).or_insert(0);
            *wanted = wanted.saturating_add(line.quantity);
            if !product.has_stock_for(*wanted) {
                tracing::debug!(
                    product_id = %product.id(),
                    stock = product.stock(),
                    requested = *wanted,
                    "insufficient stock"
                );
                return Err(StockError::InsufficientStock {
                    product_name: product.name().to_string(),
                });
            }
        }

        // Pass 2: apply. Cannot fail, every quantity was checked above.
        for (index, quantity) in requested {
            state.products[index].decrease_stock(quantity)?;
        }

        metrics::counter!("orders_placed_total").increment(1);
        metrics::counter!("stock_units_sold_total").increment(order.total_quantity());
        tracing::debug!(lines = order.lines().len(), "order applied to catalog");
        Ok(())
    }

    /// Adds `quantity` units to a product's stock and returns the updated
    /// product.
    pub fn restock(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> std::result::Result<Product, StockError> {
        let mut state = self.lock();
        let index = state.position(id).ok_or(StockError::ProductNotFound(id))?;
        let product = &mut state.products[index];
        product.increase_stock(quantity);
        tracing::info!(product_id = %id, quantity, stock = product.stock(), "product restocked");
        Ok(product.clone())
    }
}

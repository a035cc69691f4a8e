//! Catalog product record.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::StockError;

/// A sellable item and its stock counter.
///
/// Stock is unsigned, so it can never go negative. It is lowered only by
/// [`Product::decrease_stock`] (the validated checkout path) and raised only
/// by [`Product::increase_stock`] (restock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    stock: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the number of units in stock.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Returns true if at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns true if `quantity` units can be taken from stock.
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Takes `quantity` units from stock.
    ///
    /// Leaves stock untouched and returns [`StockError::InsufficientStock`]
    /// when fewer than `quantity` units are available.
    pub fn decrease_stock(&mut self, quantity: u32) -> Result<(), StockError> {
        self.stock = self
            .stock
            .checked_sub(quantity)
            .ok_or_else(|| StockError::InsufficientStock {
                product_name: self.name.clone(),
            })?;
        Ok(())
    }

    /// Adds `quantity` units to stock.
    pub fn increase_stock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }
}

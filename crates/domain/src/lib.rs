//! Domain layer for the online store.
//!
//! This crate provides the records shared by the catalog, the cart aggregator
//! and the checkout protocol:
//! - [`Product`] with its stock counter
//! - [`CartLine`] snapshot of a product taken when it is added to a cart
//! - [`Order`] immutable snapshot produced by a successful checkout
//! - [`StockError`] reported when an order cannot be applied to the catalog

pub mod cart_line;
pub mod error;
pub mod order;
pub mod product;

pub use cart_line::CartLine;
pub use common::{CustomerId, Money, OrderId, ProductId};
pub use error::StockError;
pub use order::Order;
pub use product::Product;

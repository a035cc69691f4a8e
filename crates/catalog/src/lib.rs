//! In-memory product catalog for the online store.
//!
//! The [`Store`] owns every [`Product`](domain::Product) and the order-id
//! counter. Its one non-trivial operation, [`Store::place_order`], validates
//! stock for every order line and only then decrements all of them, inside a
//! single critical section.

pub mod error;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use seed::demo_products;
pub use store::Store;

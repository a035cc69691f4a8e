//! Shared types for the online store.
//!
//! Identifiers are plain positive integers wrapped in newtypes so that a
//! product id can never be passed where a customer id is expected.

mod ids;
mod money;

pub use ids::{CustomerId, OrderId, ProductId};
pub use money::Money;

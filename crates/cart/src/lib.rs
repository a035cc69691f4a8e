//! Per-customer carts for the online store.
//!
//! [`SessionManager`] keeps one cart per customer id, independent of the
//! catalog. Carts are created on first add and dropped after checkout.

pub mod error;
pub mod session;

pub use error::CartError;
pub use session::SessionManager;

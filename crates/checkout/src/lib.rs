//! Checkout protocol for the online store.
//!
//! Checkout is the only multi-step workflow in the system:
//! 1. Read the customer's cart
//! 2. Allocate an order id
//! 3. Build the order snapshot
//! 4. Apply the order to the catalog (all or nothing)
//! 5. Clear the cart
//!
//! A failure in step 4 leaves both the catalog and the cart untouched.

pub mod error;
pub mod service;

pub use error::{CheckoutError, Result};
pub use service::CheckoutService;

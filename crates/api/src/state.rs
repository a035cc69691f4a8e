//! Shared application state.

use cart::SessionManager;
use catalog::Store;
use checkout::CheckoutService;

/// Shared application state accessible from all handlers.
///
/// Built once by the composition root and handed to the router; there are
/// no process-wide singletons.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionManager,
    pub checkout: CheckoutService,
}

impl AppState {
    /// Wires a checkout service over the given catalog and carts.
    pub fn new(store: Store, sessions: SessionManager) -> Self {
        let checkout = CheckoutService::new(store.clone(), sessions.clone());
        Self {
            store,
            sessions,
            checkout,
        }
    }
}

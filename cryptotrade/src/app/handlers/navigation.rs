//! # Navigation Handlers
//!
//! Route changes with the authentication guard.

use crate::app::route::Route;
use crate::app::state::{AppState, WalletTab};
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle route change with authentication guard
///
/// Internal handler function - use [`crate::app::App::handle_route_change`] instead.
pub(crate) fn handle_route_change(state: Arc<RwLock<AppState>>, route: Route) {
    let mut state = state.write();
    navigate(&mut state, route);
}

/// Open the wallet screen on the given tab
pub(crate) fn open_wallet_tab(state: Arc<RwLock<AppState>>, tab: WalletTab) {
    let mut state = state.write();
    state.wallet_form.set_tab(tab);
    navigate(&mut state, Route::Wallet);
}

pub(crate) fn navigate(state: &mut AppState, route: Route) {
    let resolved = route.resolve(state.is_authenticated());
    if resolved != route {
        tracing::info!(
            "Access denied: {} requires authentication, redirecting to {}",
            route.path(),
            resolved.path()
        );
    } else {
        tracing::debug!(path = route.path(), "Navigate");
    }
    state.route = resolved;
}

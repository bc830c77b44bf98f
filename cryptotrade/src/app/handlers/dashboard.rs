//! # Dashboard Handlers

use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// The referral code was put on the clipboard; show "Copied!"
///
/// Internal handler function - use [`crate::app::App::handle_referral_copied`] instead.
pub(crate) fn handle_referral_copied(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.dashboard.mark_copied(Instant::now());
    tracing::debug!("Referral code copied");
}

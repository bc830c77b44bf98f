//! # Trade Handlers
//!
//! Asset selection, price refresh and trade submission.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::tasks;
use crate::trade::TradeAction;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Select another asset and fetch its price
///
/// Internal handler function - use [`crate::app::App::handle_asset_select`] instead.
pub(crate) fn handle_asset_select(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    asset: &str,
) {
    {
        let mut state = state.write();
        if state.trade.asset == asset {
            return;
        }
        state.trade.select_asset(asset);
    }
    tasks::price::fetch_trade_price(state, event_tx);
}

pub(crate) fn handle_action_change(state: Arc<RwLock<AppState>>, action: TradeAction) {
    state.write().trade.set_action(action);
}

/// Validate the form against cached balances and record the intent
///
/// Internal handler function - use [`crate::app::App::handle_trade_submit`] instead.
pub(crate) fn handle_trade_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let wallets = state.wallets.snapshot();
    match state.trade.submit(&wallets) {
        Ok(intent) => {
            let message = format!(
                "{} {} {} recorded",
                intent.action.label(),
                intent.amount.normalize(),
                intent.asset
            );
            state.notify(NotificationLevel::Success, message);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Trade rejected");
            state.notify(NotificationLevel::Error, e.user_message());
        }
    }
}

//! # Wallet Handlers
//!
//! Deposit and withdrawal requests from the wallet screen.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, WalletTab};
use crate::utils::validation::parse_positive_amount;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{CurrencyKind, TransactionKind};
use std::sync::Arc;

/// Handle the deposit/withdraw submit button
///
/// Internal handler function - use [`crate::app::App::handle_wallet_submit`] instead.
pub(crate) fn handle_wallet_submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut guard = state.write();
    if guard.wallet_form.submitting {
        return;
    }

    let amount = match parse_positive_amount(&guard.wallet_form.amount) {
        Ok(amount) => amount,
        Err(message) => {
            guard.wallet_form.error = Some(message);
            return;
        }
    };

    let form = &mut guard.wallet_form;
    form.error = None;
    form.submitting = true;
    let tab = form.tab;
    let currency = form.currency.clone();
    let payment_kind = form.payment_kind;
    let wallets = guard.wallets.clone();
    drop(guard);

    tokio::spawn(async move {
        let (kind, result) = match tab {
            WalletTab::Deposit => (
                TransactionKind::Deposit,
                wallets.deposit(amount, &currency, payment_kind).await,
            ),
            WalletTab::Withdraw => (
                TransactionKind::Withdrawal,
                wallets.withdraw(amount, &currency, payment_kind).await,
            ),
        };
        let _ = event_tx.send(AppEvent::WalletActionResult { kind, result }).await;
    });
}

pub(crate) fn handle_payment_kind_change(state: Arc<RwLock<AppState>>, kind: CurrencyKind) {
    state.write().wallet_form.set_payment_kind(kind);
}

pub(crate) fn handle_wallet_tab_change(state: Arc<RwLock<AppState>>, tab: WalletTab) {
    state.write().wallet_form.set_tab(tab);
}

//! # Data Tasks
//!
//! Wallet, transaction and profile fetches, token refresh and the auth
//! state forwarder.

use async_channel::Sender;
use parking_lot::RwLock;
use shared::Identity;
use std::sync::Arc;
use tokio::spawn;
use tokio::sync::watch;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Refetch the wallet rows of the signed-in user
pub(crate) fn refresh_wallets(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let wallets = state.read().wallets.clone();
    spawn(async move {
        let result = wallets.fetch_wallets().await;
        let _ = event_tx.send(AppEvent::WalletsRefreshed(result)).await;
    });
}

/// Refetch the transaction history of the signed-in user
pub(crate) fn refresh_transactions(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let wallets = state.read().wallets.clone();
    spawn(async move {
        let result = wallets.fetch_transactions().await;
        let _ = event_tx.send(AppEvent::TransactionsRefreshed(result)).await;
    });
}

pub(crate) fn load_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let session = state.read().session.clone();
    spawn(async move {
        let result = session.fetch_profile().await;
        let _ = event_tx.send(AppEvent::ProfileLoaded(result)).await;
    });
}

/// Renew the access token after a fetch was rejected
pub(crate) fn refresh_session(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let session = state.read().session.clone();
    spawn(async move {
        let result = session.refresh_session().await;
        let _ = event_tx.send(AppEvent::SessionRefreshed(result)).await;
    });
}

/// Forward every auth state change to the UI thread, starting with the
/// current value. Ends when the app drops its receiver.
pub(crate) fn watch_auth_state(
    mut auth_rx: watch::Receiver<Option<Identity>>,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        loop {
            let identity = auth_rx.borrow_and_update().clone();
            tracing::debug!(signed_in = identity.is_some(), "Auth state changed");
            if event_tx.send(AppEvent::AuthStateChanged(identity)).await.is_err() {
                break;
            }
            if auth_rx.changed().await.is_err() {
                tracing::debug!("Auth state channel closed");
                break;
            }
        }
    });
}

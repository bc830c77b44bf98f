//! # Verification Handlers
//!
//! Steps of the verification wizard.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Submit personal details; marks the profile's KYC as pending
///
/// Internal handler function - use [`crate::app::App::handle_personal_info_submit`] instead.
pub(crate) fn handle_personal_info_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let mut guard = state.write();
    if guard.verification.submitting {
        return;
    }

    let update = match guard.verification.personal_info_update() {
        Ok(update) => update,
        Err(e) => {
            guard.verification.error = Some(e.user_message().to_string());
            return;
        }
    };
    guard.verification.error = None;
    guard.verification.submitting = true;
    let session = guard.session.clone();
    drop(guard);

    tokio::spawn(async move {
        let result = session.update_profile(update).await.map(|_| ());
        let _ = event_tx.send(AppEvent::VerificationSaved(result)).await;
    });
}

/// Document step; nothing is uploaded
///
/// Internal handler function - use [`crate::app::App::handle_document_upload`] instead.
pub(crate) fn handle_document_upload(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if let Err(e) = state.verification.upload_document() {
        state.verification.error = Some(e.user_message().to_string());
    }
}

//! # Settings Handlers
//!
//! Profile saves and session-only preferences.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, NotificationLevel};
use crate::settings::SettingsTab;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// "Save Changes" on the profile tab
///
/// Internal handler function - use [`crate::app::App::handle_settings_save`] instead.
pub(crate) fn handle_settings_save(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (session, update) = {
        let mut state = state.write();
        if state.settings.saving {
            return;
        }
        state.settings.saving = true;
        state.settings.status = None;
        (state.session.clone(), state.settings.profile_update())
    };

    tokio::spawn(async move {
        let result = session.update_profile(update).await.map(|_| ());
        let _ = event_tx.send(AppEvent::SettingsSaved(result)).await;
    });
}

/// "Save Preferences"; kept for this session only
pub(crate) fn handle_preferences_save(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    tracing::info!(
        language = state.settings.language.name(),
        notifications = ?state.settings.notifications,
        "Preferences saved for this session"
    );
    state.notify(NotificationLevel::Success, "Preferences saved");
}

pub(crate) fn handle_settings_tab_change(state: Arc<RwLock<AppState>>, tab: SettingsTab) {
    state.write().settings.tab = tab;
}

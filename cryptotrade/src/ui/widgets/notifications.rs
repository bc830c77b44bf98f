//! # Notifications Widget
//!
//! Toast notifications using egui-notify for wallet, trade and account
//! feedback. Handlers queue messages in [`AppState::pending_notifications`]
//! and the window drains them here every frame.
//!
//! [`AppState::pending_notifications`]: crate::app::AppState::pending_notifications

use egui_notify::Toasts;
use crate::app::NotificationLevel;

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Turn queued state notifications into toasts
    pub fn drain(&mut self, pending: Vec<(NotificationLevel, String)>) {
        for (level, message) in pending {
            match level {
                NotificationLevel::Success => self.success(message),
                NotificationLevel::Error => self.error(message),
                NotificationLevel::Info => self.info(message),
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

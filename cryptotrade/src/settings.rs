//! # Account Settings
//!
//! Tabbed settings form. Only the profile tab talks to the backend; the
//! notification toggles and language live for the session only.

use shared::{Identity, KycStatus, Profile, ProfileUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Profile,
    Security,
    Notifications,
    Preferences,
}

impl SettingsTab {
    pub fn all() -> &'static [SettingsTab] {
        &[
            SettingsTab::Profile,
            SettingsTab::Security,
            SettingsTab::Notifications,
            SettingsTab::Preferences,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Preferences => "Preferences",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Spanish, Language::French, Language::German]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub trade: bool,
    pub security: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            trade: true,
            security: true,
        }
    }
}

/// Result of the last profile save, shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub full_name: String,
    /// Read-only; the sign-in email
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub notifications: NotificationPrefs,
    pub language: Language,
    pub saving: bool,
    pub status: Option<SaveStatus>,
    loaded_for: Option<uuid::Uuid>,
}

impl SettingsState {
    /// Load the form from the profile the first time it is seen for a user
    pub fn load(&mut self, identity: &Identity, profile: Option<&Profile>) {
        if self.loaded_for == Some(identity.id) {
            return;
        }
        self.email = identity.email.clone();
        if let Some(profile) = profile {
            self.full_name = profile.full_name.clone().unwrap_or_default();
            self.phone_number = profile.phone_number.clone().unwrap_or_default();
            self.country = profile.country.clone().unwrap_or_default();
            self.loaded_for = Some(identity.id);
        }
    }

    /// Update sent by "Save Changes"
    pub fn profile_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: Some(self.full_name.trim().to_string()),
            country: Some(self.country.trim().to_string()),
            phone_number: Some(self.phone_number.trim().to_string()),
            ..Default::default()
        }
    }
}

pub fn verification_banner(status: KycStatus) -> &'static str {
    if status == KycStatus::Verified {
        "Your account is fully verified"
    } else {
        "Complete verification to unlock all features"
    }
}

//! # Settings Screen
//!
//! Tabbed account settings: profile, security, notifications, preferences.

use shared::KycStatus;

use crate::app::{AppLike, AppState};
use crate::settings::{verification_banner, Language, NotificationPrefs, SaveStatus, SettingsState, SettingsTab};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::layouts;

const FIELD_SIZE: [f32; 2] = [FIELD_WIDTH, 32.0];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let settings = &state.settings;

    forms::render_form_heading(ui, "Account Settings", &theme);

    if let Some(tab) = forms::render_segmented(ui, SettingsTab::all(), settings.tab, |t| {
        t.title().to_string()
    }) {
        app.handle_settings_tab_change(tab);
    }
    ui.separator();
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| match settings.tab {
        SettingsTab::Profile => render_profile(ui, settings, app, &theme),
        SettingsTab::Security => {
            let status = state.session.profile().map(|p| p.kyc_status).unwrap_or_default();
            render_security(ui, status, &theme);
        }
        SettingsTab::Notifications => render_notifications(ui, settings.notifications, app),
        SettingsTab::Preferences => render_preferences(ui, settings.language, app, &theme),
    });
}

fn render_profile(ui: &mut egui::Ui, settings: &SettingsState, app: &mut impl AppLike, theme: &Theme) {
    let mut full_name = settings.full_name.clone();
    let mut phone_number = settings.phone_number.clone();
    let mut country = settings.country.clone();

    if forms::render_text_input(ui, "Full Name", &mut full_name, "Your name", false, FIELD_SIZE).changed() {
        app.state().write().settings.full_name = full_name;
    }
    ui.add_space(8.0);

    forms::render_read_only(ui, "Email", &settings.email, FIELD_SIZE, theme);
    ui.add_space(8.0);

    if forms::render_text_input(ui, "Phone Number", &mut phone_number, "+1 555 000 0000", false, FIELD_SIZE)
        .changed()
    {
        app.state().write().settings.phone_number = phone_number;
    }
    ui.add_space(8.0);

    if forms::render_text_input(ui, "Country", &mut country, "Country of residence", false, FIELD_SIZE)
        .changed()
    {
        app.state().write().settings.country = country;
    }
    ui.add_space(14.0);

    let label = if settings.saving { "Saving..." } else { "Save Changes" };
    if forms::render_primary_button(ui, label, !settings.saving, theme, FIELD_WIDTH) {
        app.handle_settings_save();
    }

    match &settings.status {
        Some(SaveStatus::Saved) => {
            ui.colored_label(theme.success, "Profile updated");
        }
        Some(SaveStatus::Failed(message)) => forms::render_error(ui, message, theme),
        None => {}
    }
}

fn render_security(ui: &mut egui::Ui, status: KycStatus, theme: &Theme) {
    layouts::render_panel(ui, None, |ui| {
        ui.label(egui::RichText::new("Verification Status").strong().color(theme.warning));
        ui.label(verification_banner(status));
    });
    ui.add_space(14.0);

    ui.heading("Security Settings");
    ui.add_space(8.0);
    let size = egui::vec2(FIELD_WIDTH, 36.0);
    // Not wired to any backend flow yet
    ui.add(egui::Button::new("Change Password  →").min_size(size));
    ui.add(egui::Button::new("Two-Factor Authentication  →").min_size(size));
}

fn render_notifications(ui: &mut egui::Ui, prefs: NotificationPrefs, app: &mut impl AppLike) {
    ui.heading("Email Notifications");
    ui.add_space(8.0);

    let mut edited = prefs;
    ui.checkbox(&mut edited.email, "Email Notifications");
    ui.checkbox(&mut edited.push, "Push Notifications");
    ui.checkbox(&mut edited.trade, "Trade Notifications");
    ui.checkbox(&mut edited.security, "Security Notifications");

    if edited != prefs {
        app.state().write().settings.notifications = edited;
    }
}

fn render_preferences(ui: &mut egui::Ui, language: Language, app: &mut impl AppLike, theme: &Theme) {
    ui.label("Language");
    let mut picked = language;
    egui::ComboBox::from_id_salt("settings_language")
        .selected_text(language.name())
        .width(FIELD_WIDTH)
        .show_ui(ui, |ui| {
            for &option in Language::all() {
                ui.selectable_value(&mut picked, option, option.name());
            }
        });
    if picked != language {
        app.state().write().settings.language = picked;
    }
    ui.add_space(14.0);

    if forms::render_primary_button(ui, "Save Preferences", true, theme, FIELD_WIDTH) {
        app.handle_preferences_save();
    }
}

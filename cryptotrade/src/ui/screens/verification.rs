//! # Verification Screen
//!
//! Step indicator plus one panel per wizard step.

use crate::app::{AppLike, AppState, Route};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::layouts;
use crate::verification::{VerificationStep, VerificationWizard};

const FIELD_SIZE: [f32; 2] = [FIELD_WIDTH, 32.0];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let wizard = &state.verification;

    layouts::render_centered(ui, |ui| {
        ui.set_max_width(FIELD_WIDTH * 1.6);
        forms::render_form_heading(ui, "Account Verification", &theme);
        render_steps(ui, wizard.step, &theme);
        ui.add_space(20.0);

        match wizard.step {
            VerificationStep::PersonalInfo => render_personal_info(ui, wizard, app, &theme),
            VerificationStep::Documents => render_documents(ui, wizard, app, &theme),
            VerificationStep::Confirmed => render_confirmed(ui, app, &theme),
        }
    });
}

fn render_steps(ui: &mut egui::Ui, current: VerificationStep, theme: &Theme) {
    ui.horizontal(|ui| {
        for (i, step) in VerificationStep::all().iter().enumerate() {
            if i > 0 {
                ui.colored_label(theme.dim, "──");
            }
            let color = if step.number() <= current.number() {
                theme.selected
            } else {
                theme.dim
            };
            ui.colored_label(color, format!("{}. {}", step.number(), step.title()));
        }
    });
}

fn render_personal_info(
    ui: &mut egui::Ui,
    wizard: &VerificationWizard,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    let mut full_name = wizard.full_name.clone();
    let mut phone_number = wizard.phone_number.clone();
    let mut country = wizard.country.clone();

    ui.add_enabled_ui(!wizard.submitting, |ui| {
        if forms::render_text_input(ui, "Full Name", &mut full_name, "As shown on your ID", false, FIELD_SIZE)
            .changed()
        {
            app.state().write().verification.full_name = full_name;
        }
        ui.add_space(8.0);

        if forms::render_text_input(ui, "Phone Number", &mut phone_number, "+1 555 000 0000", false, FIELD_SIZE)
            .changed()
        {
            app.state().write().verification.phone_number = phone_number;
        }
        ui.add_space(8.0);

        if forms::render_text_input(ui, "Country", &mut country, "Country of residence", false, FIELD_SIZE)
            .changed()
        {
            app.state().write().verification.country = country;
        }
    });
    ui.add_space(12.0);

    if let Some(err) = &wizard.error {
        forms::render_error(ui, err, theme);
    }

    let label = if wizard.submitting { "Saving..." } else { "Continue" };
    if forms::render_primary_button(ui, label, !wizard.submitting, theme, FIELD_WIDTH) {
        app.handle_personal_info_submit();
    }
}

fn render_documents(
    ui: &mut egui::Ui,
    wizard: &VerificationWizard,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    layouts::render_panel(ui, Some("Upload ID Document"), |ui| {
        ui.label("Passport, national ID card or driver's license");
        forms::render_hint(ui, "Supported formats: JPG, PNG, PDF (max 5MB)", theme);
    });
    ui.add_space(12.0);

    if let Some(err) = &wizard.error {
        forms::render_error(ui, err, theme);
    }

    if forms::render_primary_button(ui, "Upload Document", true, theme, FIELD_WIDTH) {
        app.handle_document_upload();
    }
}

fn render_confirmed(ui: &mut egui::Ui, app: &mut impl AppLike, theme: &Theme) {
    ui.label(egui::RichText::new("Verification Submitted").size(20.0).color(theme.success));
    ui.add_space(8.0);
    ui.label(
        "Your documents are being reviewed. This process typically takes 1-2 business days.",
    );
    ui.add_space(16.0);

    if forms::render_primary_button(ui, "Return to Dashboard", true, theme, FIELD_WIDTH) {
        app.handle_route_change(Route::Dashboard);
    }
}

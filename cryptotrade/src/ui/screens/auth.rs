//! # Authentication Screen
//!
//! Login and signup forms using egui widgets.

use crate::app::{AppLike, AppState, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::layouts;

const FIELD_SIZE: [f32; 2] = [FIELD_WIDTH, 32.0];

/// Render authentication screen (login/signup)
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();

    layouts::render_centered(ui, |ui| {
        ui.set_max_width(FIELD_WIDTH);
        match &state.auth {
            AuthState::Login { email, password, error } => render_login_form(
                ui,
                email,
                password,
                error.as_deref(),
                state.auth_busy,
                app,
                &theme,
            ),
            AuthState::Signup {
                email,
                password,
                confirm_password,
                error,
            } => render_signup_form(
                ui,
                [email, password, confirm_password],
                error.as_deref(),
                state.auth_busy,
                app,
                &theme,
            ),
        }
    });
}

/// Write an edited field back into the auth form if it is still showing
fn write_back(app: &mut impl AppLike, update: impl FnOnce(&mut AuthState)) {
    let mut state = app.state().write();
    update(&mut state.auth);
}

fn render_login_form(
    ui: &mut egui::Ui,
    email: &str,
    password: &str,
    error: Option<&str>,
    busy: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Sign In", theme);

    let mut email_input = email.to_string();
    let mut password_input = password.to_string();

    let email_response =
        forms::render_text_input(ui, "Email", &mut email_input, "you@example.com", false, FIELD_SIZE);
    if email_response.changed() {
        write_back(app, |auth| {
            if let AuthState::Login { email, .. } = auth {
                *email = email_input.clone();
            }
        });
    }
    ui.add_space(10.0);

    let password_response =
        forms::render_text_input(ui, "Password", &mut password_input, "Your password", true, FIELD_SIZE);
    if password_response.changed() {
        write_back(app, |auth| {
            if let AuthState::Login { password, .. } = auth {
                *password = password_input.clone();
            }
        });
    }
    let submit = forms::submitted(ui, &password_response);
    ui.add_space(15.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    let label = if busy { "Signing in..." } else { "Sign In" };
    if forms::render_primary_button(ui, label, !busy, theme, FIELD_WIDTH) || (submit && !busy) {
        app.handle_login_click();
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "Don't have an account?", theme);
        if ui.link("Sign up").clicked() {
            app.handle_switch_to_signup();
        }
    });
}

fn render_signup_form(
    ui: &mut egui::Ui,
    [email, password, confirm_password]: [&String; 3],
    error: Option<&str>,
    busy: bool,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create Account", theme);

    let mut email_input = email.clone();
    let mut password_input = password.clone();
    let mut confirm_input = confirm_password.clone();

    if forms::render_text_input(ui, "Email", &mut email_input, "you@example.com", false, FIELD_SIZE)
        .changed()
    {
        write_back(app, |auth| {
            if let AuthState::Signup { email, .. } = auth {
                *email = email_input.clone();
            }
        });
    }
    ui.add_space(10.0);

    if forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "At least 6 characters",
        true,
        FIELD_SIZE,
    )
    .changed()
    {
        write_back(app, |auth| {
            if let AuthState::Signup { password, .. } = auth {
                *password = password_input.clone();
            }
        });
    }
    ui.add_space(10.0);

    let confirm_response = forms::render_text_input(
        ui,
        "Confirm Password",
        &mut confirm_input,
        "Repeat your password",
        true,
        FIELD_SIZE,
    );
    if confirm_response.changed() {
        write_back(app, |auth| {
            if let AuthState::Signup { confirm_password, .. } = auth {
                *confirm_password = confirm_input.clone();
            }
        });
    }
    let submit = forms::submitted(ui, &confirm_response);
    ui.add_space(15.0);

    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    let label = if busy { "Creating account..." } else { "Sign Up" };
    if forms::render_primary_button(ui, label, !busy, theme, FIELD_WIDTH) || (submit && !busy) {
        app.handle_signup_click();
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "Already have an account?", theme);
        if ui.link("Sign in").clicked() {
            app.handle_switch_to_login();
        }
    });
}

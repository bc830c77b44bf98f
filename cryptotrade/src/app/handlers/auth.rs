//! # Authentication Handlers
//!
//! Handlers for sign-in, sign-up and sign-out.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState};
use crate::utils::validation::{
    validate_email, validate_password, validate_password_confirmation, ValidationResult,
};
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle sign-in button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut guard = state.write();
    if guard.auth_busy {
        return;
    }
    let AuthState::Login { email, password, .. } = &guard.auth else {
        return;
    };
    let email = email.trim().to_string();
    let password = password.clone();

    if let Some(error) =
        ValidationResult::first_error([validate_email(&email), validate_password(&password)])
    {
        guard.auth.set_error(Some(error));
        return;
    }

    guard.auth.set_error(None);
    guard.auth_busy = true;
    let session = guard.session.clone();
    drop(guard);

    tracing::info!(email = %email, "Signing in");
    tokio::spawn(async move {
        let result = session.sign_in(email, password).await;
        let _ = event_tx.send(AppEvent::SignInResult(result)).await;
    });
}

/// Handle sign-up button click
///
/// Internal handler function - use [`crate::app::App::handle_signup_click`] instead.
pub(crate) fn handle_signup_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let mut guard = state.write();
    if guard.auth_busy {
        return;
    }
    let AuthState::Signup {
        email,
        password,
        confirm_password,
        ..
    } = &guard.auth
    else {
        return;
    };
    let email = email.trim().to_string();
    let password = password.clone();
    let confirm_password = confirm_password.clone();

    if let Some(error) = ValidationResult::first_error([
        validate_email(&email),
        validate_password(&password),
        validate_password_confirmation(&password, &confirm_password),
    ]) {
        guard.auth.set_error(Some(error));
        return;
    }

    guard.auth.set_error(None);
    guard.auth_busy = true;
    let session = guard.session.clone();
    drop(guard);

    tracing::info!(email = %email, "Signing up");
    tokio::spawn(async move {
        let result = session.sign_up(email, password).await;
        let _ = event_tx.send(AppEvent::SignUpResult(result)).await;
    });
}

/// Handle "Sign Out" in the navbar
///
/// Internal handler function - use [`crate::app::App::handle_sign_out_click`] instead.
pub(crate) fn handle_sign_out_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let session = {
        let mut state = state.write();
        if state.signing_out {
            return;
        }
        state.signing_out = true;
        state.session.clone()
    };

    tokio::spawn(async move {
        let result = session.sign_out().await;
        let _ = event_tx.send(AppEvent::SignOutResult(result)).await;
    });
}

/// Switch to the login form, keeping the typed email
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_login`] instead.
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let email = match &state.auth {
        AuthState::Login { .. } => return,
        AuthState::Signup { email, .. } => email.clone(),
    };
    state.auth = AuthState::Login {
        email,
        password: String::new(),
        error: None,
    };
}

/// Switch to the sign-up form, keeping the typed email
///
/// Internal handler function - use [`crate::app::App::handle_switch_to_signup`] instead.
pub(crate) fn handle_switch_to_signup(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let email = match &state.auth {
        AuthState::Signup { .. } => return,
        AuthState::Login { email, .. } => email.clone(),
    };
    state.auth = AuthState::Signup {
        email,
        password: String::new(),
        confirm_password: String::new(),
        error: None,
    };
}

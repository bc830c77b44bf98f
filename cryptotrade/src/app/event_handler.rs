//! # Event Handler
//!
//! Applies background task results to the application state.
//!
//! Each event takes the state write lock once, for as long as the update
//! needs and never across an await.

use rust_decimal::Decimal;
use shared::{Identity, Profile, SignUpResponse, Transaction, TransactionKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::app::route::Route;
use crate::app::state::{AppState, AuthState, NotificationLevel};
use crate::app::{tasks, App, AppEvent};
use crate::core::error::{AppError, Result};
use crate::settings::SaveStatus;

/// A rejected request triggers at most one token refresh per window
const SESSION_REFRESH_COOLDOWN: Duration = Duration::from_secs(60);

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthStateChanged(identity) => self.handle_auth_state_changed(identity),
            AppEvent::SignInResult(result) => self.handle_sign_in_result(result),
            AppEvent::SignUpResult(result) => self.handle_sign_up_result(result),
            AppEvent::SignOutResult(result) => self.handle_sign_out_result(result),
            AppEvent::SessionRefreshed(result) => self.handle_session_refreshed(result),
            AppEvent::ProfileLoaded(result) => self.handle_profile_loaded(result),
            AppEvent::WalletsRefreshed(result) => self.handle_wallets_refreshed(result),
            AppEvent::TransactionsRefreshed(result) => {
                tracing::debug!(success = result.is_ok(), "Transactions refreshed");
                if let Err(e) = result {
                    self.recover_rejected_session(&e);
                }
            }
            AppEvent::WalletActionResult { kind, result } => {
                self.handle_wallet_action_result(kind, result)
            }
            AppEvent::TradePriceResult { asset, result } => {
                self.handle_trade_price_result(asset, result)
            }
            AppEvent::DashboardPrices(prices) => self.handle_dashboard_prices(prices),
            AppEvent::VerificationSaved(result) => {
                self.state.write().verification.personal_info_saved(result);
            }
            AppEvent::SettingsSaved(result) => self.handle_settings_saved(result),
        }
    }
}

/// Drop everything cached for the previous user
fn clear_user_data(state: &mut AppState) {
    state.wallets.clear();
    state.reset_user_forms();
}

impl App {
    fn handle_auth_state_changed(&mut self, identity: Option<Identity>) {
        let mut state = self.state.write();
        let previous = state.session.identity().map(|i| i.id);
        let next = identity.as_ref().map(|i| i.id);
        state.session.set_identity(identity);

        if previous.is_some() && previous != next {
            clear_user_data(&mut state);
        }

        match next {
            Some(user_id) => {
                tracing::info!(user_id = %user_id, "Signed in");
                state.auth_busy = false;
                state.auth.clear_passwords();
                state.auth.set_error(None);
                if state.route == Route::Auth {
                    state.route = Route::Dashboard;
                }
                if previous != next {
                    drop(state);
                    tasks::data::load_profile(self.state.clone(), self.event_tx.clone());
                }
            }
            None => {
                if previous.is_some() {
                    tracing::info!("Signed out");
                }
                state.route = state.route.resolve(false);
            }
        }
    }

    fn handle_sign_in_result(&mut self, result: Result<()>) {
        tracing::info!(event = "SignInResult", success = result.is_ok(), "Processing sign-in result");
        let mut state = self.state.write();
        state.auth_busy = false;
        if let Err(e) = result {
            state.auth.set_error(Some(e.user_message().to_string()));
        }
    }

    fn handle_sign_up_result(&mut self, result: Result<SignUpResponse>) {
        tracing::info!(event = "SignUpResult", success = result.is_ok(), "Processing sign-up result");
        let mut state = self.state.write();
        state.auth_busy = false;
        match result {
            Ok(SignUpResponse::Session(_)) => {}
            Ok(SignUpResponse::PendingConfirmation(identity)) => {
                state.auth = AuthState::Login {
                    email: identity.email,
                    password: String::new(),
                    error: None,
                };
                state.notify(
                    NotificationLevel::Info,
                    "Check your email to confirm your account, then sign in",
                );
            }
            Err(e) => state.auth.set_error(Some(e.user_message().to_string())),
        }
    }

    fn handle_sign_out_result(&mut self, result: Result<()>) {
        let mut state = self.state.write();
        state.signing_out = false;
        match result {
            Ok(()) => {
                clear_user_data(&mut state);
                state.route = Route::Auth;
            }
            Err(e) => {
                state.notify(
                    NotificationLevel::Error,
                    format!("Sign out failed: {}", e.user_message()),
                );
            }
        }
    }

    /// Start a token refresh when a fetch failed because the backend no
    /// longer accepts the session
    fn recover_rejected_session(&mut self, error: &AppError) {
        if !matches!(error, AppError::Auth(_)) {
            return;
        }
        let now = Instant::now();
        {
            let mut state = self.state.write();
            if !state.is_authenticated() || state.refreshing_session {
                return;
            }
            if let Some(at) = state.session_refreshed_at {
                if now.duration_since(at) < SESSION_REFRESH_COOLDOWN {
                    return;
                }
            }
            state.refreshing_session = true;
            state.session_refreshed_at = Some(now);
        }
        tracing::info!(error = %error, "Request rejected, refreshing session");
        tasks::data::refresh_session(self.state.clone(), self.event_tx.clone());
    }

    fn handle_session_refreshed(&mut self, result: Result<()>) {
        let route = {
            let mut state = self.state.write();
            state.refreshing_session = false;
            match &result {
                Ok(()) => state.current_route(),
                Err(AppError::Auth(_)) => {
                    state.notify(
                        NotificationLevel::Error,
                        "Your session has expired. Please sign in again.",
                    );
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Session refresh failed, keeping session");
                    return;
                }
            }
        };
        self.refresh_route(route);
    }

    fn handle_profile_loaded(&mut self, result: Result<Profile>) {
        let profile = match result {
            Ok(profile) => profile,
            Err(e) => {
                self.recover_rejected_session(&e);
                return;
            }
        };
        let mut state = self.state.write();
        let Some(identity) = state.session.identity() else {
            return;
        };
        if identity.id != profile.id {
            tracing::debug!("Ignoring profile of a previous session");
            return;
        }
        state.settings.load(&identity, Some(&profile));
        state.verification.prefill(&profile);
    }

    fn handle_wallets_refreshed(&mut self, result: Result<()>) {
        if let Err(e) = result {
            self.recover_rejected_session(&e);
            return;
        }
        let on_dashboard = self.state.read().current_route() == Route::Dashboard;
        if on_dashboard {
            tasks::price::fetch_dashboard_prices(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_wallet_action_result(&mut self, kind: TransactionKind, result: Result<Transaction>) {
        let mut state = self.state.write();
        state.wallet_form.submitting = false;
        match result {
            Ok(transaction) => {
                state.wallet_form.amount.clear();
                state.wallet_form.error = None;
                let message = match kind {
                    TransactionKind::Deposit => "Deposit request submitted",
                    TransactionKind::Withdrawal => "Withdrawal request submitted",
                };
                tracing::info!(transaction_id = %transaction.id, "{}", message);
                state.notify(NotificationLevel::Success, message);
                drop(state);
                tasks::data::refresh_wallets(self.state.clone(), self.event_tx.clone());
            }
            Err(e) => {
                state.wallet_form.error = Some(e.user_message().to_string());
            }
        }
    }

    fn handle_trade_price_result(&mut self, asset: String, result: Result<Decimal>) {
        let mut state = self.state.write();
        if state.price_fetching.as_deref() == Some(asset.as_str()) {
            state.price_fetching = None;
        }
        if state.trade.asset == asset {
            state.trade.is_loading = false;
        }
        match result {
            Ok(price) => {
                tracing::debug!(asset = %asset, price = %price, "Trade price updated");
                state.trade.set_price(&asset, price);
            }
            Err(e) => {
                tracing::warn!(asset = %asset, error = %e, "Error fetching price");
            }
        }
    }

    fn handle_dashboard_prices(&mut self, prices: HashMap<String, Decimal>) {
        self.state.write().dashboard.prices.extend(prices);
    }

    fn handle_settings_saved(&mut self, result: Result<()>) {
        let mut state = self.state.write();
        state.settings.saving = false;
        state.settings.status = Some(match result {
            Ok(()) => SaveStatus::Saved,
            Err(e) => SaveStatus::Failed(e.user_message().to_string()),
        });
    }
}

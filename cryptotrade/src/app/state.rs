//! # Application State Types
//!
//! Everything a frame needs to render: the current route, form state of each
//! screen and handles to the session and wallet stores.
//!
//! The stores keep their data behind their own locks, so cloning an
//! [`AppState`] for rendering is cheap and never copies wallet rows.

use shared::CurrencyKind;
use std::sync::Arc;
use std::time::Instant;

use super::route::Route;
use crate::core::service::PriceService;
use crate::dashboard::DashboardState;
use crate::settings::SettingsState;
use crate::stores::{SessionStore, WalletStore};
use crate::trade::TradeForm;
use crate::verification::VerificationWizard;

/// Authentication form
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Login {
        email: String,
        password: String,
        error: Option<String>,
    },
    Signup {
        email: String,
        password: String,
        confirm_password: String,
        error: Option<String>,
    },
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }
}

impl AuthState {
    pub fn set_error(&mut self, message: Option<String>) {
        match self {
            AuthState::Login { error, .. } | AuthState::Signup { error, .. } => *error = message,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Login { error, .. } | AuthState::Signup { error, .. } => error.as_deref(),
        }
    }

    /// Clear the typed password fields, keeping the email
    pub fn clear_passwords(&mut self) {
        match self {
            AuthState::Login { password, .. } => password.clear(),
            AuthState::Signup {
                password,
                confirm_password,
                ..
            } => {
                password.clear();
                confirm_password.clear();
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalletTab {
    #[default]
    Deposit,
    Withdraw,
}

impl WalletTab {
    pub fn all() -> &'static [WalletTab] {
        &[WalletTab::Deposit, WalletTab::Withdraw]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletTab::Deposit => "Deposit",
            WalletTab::Withdraw => "Withdraw",
        }
    }
}

/// Deposit/withdraw form of the wallet screen
#[derive(Debug, Clone)]
pub struct WalletForm {
    pub tab: WalletTab,
    pub payment_kind: CurrencyKind,
    pub currency: String,
    pub amount: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for WalletForm {
    fn default() -> Self {
        Self {
            tab: WalletTab::Deposit,
            payment_kind: CurrencyKind::Fiat,
            currency: "USD".to_string(),
            amount: String::new(),
            error: None,
            submitting: false,
        }
    }
}

impl WalletForm {
    /// Switching the payment type resets the currency to USD or BTC
    pub fn set_payment_kind(&mut self, kind: CurrencyKind) {
        self.payment_kind = kind;
        self.currency = match kind {
            CurrencyKind::Fiat => "USD",
            CurrencyKind::Crypto => "BTC",
        }
        .to_string();
        self.error = None;
    }

    pub fn set_tab(&mut self, tab: WalletTab) {
        self.tab = tab;
        self.error = None;
    }

    pub fn placeholder(&self) -> &'static str {
        match self.tab {
            WalletTab::Deposit => "Minimum $1",
            WalletTab::Withdraw => "Minimum $5",
        }
    }

    /// "Deposit USD", "Withdraw BTC", ...
    pub fn submit_label(&self) -> String {
        format!("{} {}", self.tab.label(), self.currency)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    /// Requested route; see [`AppState::current_route`] for what is shown
    pub route: Route,
    pub auth: AuthState,
    pub auth_busy: bool,
    pub signing_out: bool,
    /// Token refresh in flight after the backend rejected the session
    pub refreshing_session: bool,
    /// Last token refresh started from a rejected request
    pub session_refreshed_at: Option<Instant>,
    pub session: SessionStore,
    pub wallets: WalletStore,
    pub price_service: Arc<dyn PriceService>,
    pub trade: TradeForm,
    /// Asset whose trade price is being fetched
    pub price_fetching: Option<String>,
    pub dashboard: DashboardState,
    pub wallet_form: WalletForm,
    pub verification: VerificationWizard,
    pub settings: SettingsState,
    /// Toasts queued for the next frame
    pub pending_notifications: Vec<(NotificationLevel, String)>,
}

impl AppState {
    pub fn new(session: SessionStore, wallets: WalletStore, price_service: Arc<dyn PriceService>) -> Self {
        Self {
            route: Route::Dashboard,
            auth: AuthState::default(),
            auth_busy: false,
            signing_out: false,
            refreshing_session: false,
            session_refreshed_at: None,
            session,
            wallets,
            price_service,
            trade: TradeForm::default(),
            price_fetching: None,
            dashboard: DashboardState::default(),
            wallet_form: WalletForm::default(),
            verification: VerificationWizard::default(),
            settings: SettingsState::default(),
            pending_notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Route on screen after the authentication guard
    pub fn current_route(&self) -> Route {
        self.route.resolve(self.is_authenticated())
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }

    /// Forget per-user form state after sign-out
    pub fn reset_user_forms(&mut self) {
        self.refreshing_session = false;
        self.session_refreshed_at = None;
        self.trade = TradeForm::default();
        self.price_fetching = None;
        self.dashboard = DashboardState::default();
        self.wallet_form = WalletForm::default();
        self.verification = VerificationWizard::default();
        self.settings = SettingsState::default();
    }
}

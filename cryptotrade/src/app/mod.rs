//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI, background tasks and state.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Main Thread (egui)                      │
//! │  App::on_tick()       drain events, run refresh timers   │
//! │  App::handle_*()      user actions from the screens      │
//! │  Arc<RwLock<AppState>> read briefly for each frame       │
//! └───────────────────────────┬──────────────────────────────┘
//!                             │ async_channel (unbounded)
//! ┌───────────────────────────▼──────────────────────────────┐
//! │                Tokio tasks                               │
//! │  tasks::data   wallets, transactions, profile, auth feed │
//! │  tasks::price  trade price, dashboard prices             │
//! │  handlers::*   sign-in, deposits, profile updates        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are never held across an await. Tasks clone the store handles
//! they need, release the lock and report back with an [`AppEvent`].
//!
//! ## Refresh timers
//!
//! | Route | When | Fetches |
//! |---|---|---|
//! | `/` | on entry, every refresh interval | wallets, transactions, profile, prices |
//! | `/trade` | on entry, every refresh interval | price, wallets |
//! | `/wallet` | on entry | wallets, transactions |
//! | `/verification`, `/settings` | on entry | profile |

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod refresh;
mod route;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use refresh::PeriodicRefresh;
pub use route::Route;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::CurrencyKind;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::core::service::{AuthService, DataService, PriceService};
use crate::services::api::ApiClient;
use crate::settings::SettingsTab;
use crate::stores::{SessionStore, WalletStore};
use crate::trade::TradeAction;
use event_handler::AppEventHandler;

pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration; rendering works on a clone.
    pub state: Arc<RwLock<AppState>>,

    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every background task.
    event_tx: Sender<AppEvent>,

    refreshers: Vec<PeriodicRefresh>,
}

impl App {
    /// Create the app against the hosted backend.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Arc::new(ApiClient::new(config.clone()));
        Self::with_services(client.clone(), client.clone(), client, config.refresh_interval)
    }

    /// Create the app with explicit services.
    ///
    /// Starts forwarding auth state changes right away, so this must be
    /// called inside a Tokio runtime.
    pub fn with_services(
        auth: Arc<dyn AuthService>,
        data: Arc<dyn DataService>,
        prices: Arc<dyn PriceService>,
        refresh_interval: Duration,
    ) -> Self {
        let session = SessionStore::new(auth, data.clone());
        let wallets = WalletStore::new(data, session.clone());
        let auth_rx = session.subscribe();
        let state = AppState::new(session, wallets, prices);

        let (event_tx, event_rx) = unbounded();
        tasks::data::watch_auth_state(auth_rx, event_tx.clone());

        let refreshers = vec![
            PeriodicRefresh::every(Route::Dashboard, refresh_interval),
            PeriodicRefresh::every(Route::Trade, refresh_interval),
            PeriodicRefresh::on_enter(Route::Wallet),
            PeriodicRefresh::on_enter(Route::Verification),
            PeriodicRefresh::on_enter(Route::Settings),
        ];

        tracing::info!(
            refresh_secs = refresh_interval.as_secs(),
            "App state initialized - event channel created"
        );

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            refreshers,
        }
    }

    /// Called every frame: apply finished task results, then start the
    /// refreshes that are due for the route on screen.
    pub fn on_tick(&mut self) {
        let mut events_processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            events_processed += 1;
            self.handle_event(event);
        }
        if events_processed > 0 {
            tracing::trace!(events_processed, "on_tick: processed events");
        }

        self.run_refreshers(Instant::now());
    }

    fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    fn run_refreshers(&mut self, now: Instant) {
        let current = {
            let state = self.state.read();
            if state.session.snapshot().is_loading {
                return;
            }
            state.current_route()
        };

        let due: Vec<Route> = self
            .refreshers
            .iter_mut()
            .filter_map(|refresh| refresh.poll(current, now).then(|| refresh.route()))
            .collect();

        for route in due {
            self.refresh_route(route);
        }
    }

    fn refresh_route(&mut self, route: Route) {
        tracing::debug!(path = route.path(), "Refreshing screen data");
        let state = self.state.clone();
        let tx = self.event_tx.clone();
        match route {
            Route::Dashboard => {
                tasks::data::refresh_wallets(state.clone(), tx.clone());
                tasks::data::refresh_transactions(state.clone(), tx.clone());
                tasks::data::load_profile(state, tx);
            }
            Route::Trade => {
                tasks::price::fetch_trade_price(state.clone(), tx.clone());
                tasks::data::refresh_wallets(state, tx);
            }
            Route::Wallet => {
                tasks::data::refresh_wallets(state.clone(), tx.clone());
                tasks::data::refresh_transactions(state, tx);
            }
            Route::Verification | Route::Settings => {
                {
                    let mut guard = state.write();
                    let session = guard.session.snapshot();
                    if let (Some(identity), Some(profile)) = (&session.identity, &session.profile) {
                        guard.settings.load(identity, Some(profile));
                        guard.verification.prefill(profile);
                    }
                }
                tasks::data::load_profile(state, tx);
            }
            Route::Auth => {}
        }
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_route_change(&mut self, route: Route) {
        handlers::navigation::handle_route_change(self.state.clone(), route);
    }

    fn open_wallet_tab(&mut self, tab: WalletTab) {
        handlers::navigation::open_wallet_tab(self.state.clone(), tab);
    }

    fn handle_login_click(&mut self) {
        handlers::auth::handle_login_click(self.state.clone(), self.event_tx.clone());
    }

    fn handle_signup_click(&mut self) {
        handlers::auth::handle_signup_click(self.state.clone(), self.event_tx.clone());
    }

    fn handle_switch_to_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    fn handle_switch_to_signup(&mut self) {
        handlers::auth::handle_switch_to_signup(self.state.clone());
    }

    fn handle_sign_out_click(&mut self) {
        handlers::auth::handle_sign_out_click(self.state.clone(), self.event_tx.clone());
    }

    fn handle_referral_copied(&mut self) {
        handlers::dashboard::handle_referral_copied(self.state.clone());
    }

    fn handle_asset_select(&mut self, asset: &str) {
        handlers::trade::handle_asset_select(self.state.clone(), self.event_tx.clone(), asset);
    }

    fn handle_action_change(&mut self, action: TradeAction) {
        handlers::trade::handle_action_change(self.state.clone(), action);
    }

    fn handle_price_refresh(&mut self) {
        tasks::price::fetch_trade_price(self.state.clone(), self.event_tx.clone());
        let now = Instant::now();
        for refresh in self.refreshers.iter_mut().filter(|r| r.route() == Route::Trade) {
            refresh.reset(now);
        }
    }

    fn handle_trade_submit(&mut self) {
        handlers::trade::handle_trade_submit(self.state.clone());
    }

    fn handle_wallet_tab_change(&mut self, tab: WalletTab) {
        handlers::wallet::handle_wallet_tab_change(self.state.clone(), tab);
    }

    fn handle_payment_kind_change(&mut self, kind: CurrencyKind) {
        handlers::wallet::handle_payment_kind_change(self.state.clone(), kind);
    }

    fn handle_wallet_submit(&mut self) {
        handlers::wallet::handle_wallet_submit(self.state.clone(), self.event_tx.clone());
    }

    fn handle_personal_info_submit(&mut self) {
        handlers::verification::handle_personal_info_submit(self.state.clone(), self.event_tx.clone());
    }

    fn handle_document_upload(&mut self) {
        handlers::verification::handle_document_upload(self.state.clone());
    }

    fn handle_settings_tab_change(&mut self, tab: SettingsTab) {
        handlers::settings::handle_settings_tab_change(self.state.clone(), tab);
    }

    fn handle_settings_save(&mut self) {
        handlers::settings::handle_settings_save(self.state.clone(), self.event_tx.clone());
    }

    fn handle_preferences_save(&mut self) {
        handlers::settings::handle_preferences_save(self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake::FakeBackend;
    use crate::verification::VerificationStep;
    use rust_decimal::Decimal;
    use shared::KycStatus;
    use std::sync::atomic::Ordering;

    const INTERVAL: Duration = Duration::from_secs(30);

    fn app_with(backend: &Arc<FakeBackend>) -> App {
        App::with_services(backend.clone(), backend.clone(), backend.clone(), INTERVAL)
    }

    /// Tick until `done` holds, letting spawned tasks run in between
    async fn pump(app: &mut App, done: impl Fn(&AppState) -> bool) {
        for _ in 0..200 {
            app.on_tick();
            if done(&app.state.read()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        panic!("condition not reached");
    }

    async fn signed_in_app(backend: &Arc<FakeBackend>) -> App {
        backend.signed_in("ada@example.com");
        let mut app = app_with(backend);
        pump(&mut app, |s| s.is_authenticated()).await;
        app
    }

    fn fill_login(app: &App, email: &str, password: &str) {
        app.state.write().auth = AuthState::Login {
            email: email.to_string(),
            password: password.to_string(),
            error: None,
        };
    }

    #[tokio::test]
    async fn test_starts_on_auth_when_signed_out() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = app_with(&backend);
        pump(&mut app, |s| !s.session.snapshot().is_loading).await;

        let state = app.state.read();
        assert_eq!(state.route, Route::Auth);
        assert_eq!(state.current_route(), Route::Auth);
    }

    #[tokio::test]
    async fn test_sign_in_moves_to_dashboard() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        backend.register("ada@example.com", "secret123");
        let mut app = app_with(&backend);
        pump(&mut app, |s| !s.session.snapshot().is_loading).await;

        // Act
        fill_login(&app, "ada@example.com", "secret123");
        app.handle_login_click();
        pump(&mut app, |s| s.is_authenticated() && !s.auth_busy).await;

        // Assert
        let state = app.state.read();
        assert_eq!(state.current_route(), Route::Dashboard);
        assert!(state.auth.error().is_none());
        match &state.auth {
            AuthState::Login { password, .. } => assert!(password.is_empty()),
            AuthState::Signup { .. } => panic!("unexpected signup form"),
        }
    }

    #[tokio::test]
    async fn test_sign_in_rejection_shows_error() {
        let backend = Arc::new(FakeBackend::new());
        backend.register("ada@example.com", "secret123");
        let mut app = app_with(&backend);

        fill_login(&app, "ada@example.com", "wrong-password");
        app.handle_login_click();
        pump(&mut app, |s| s.auth.error().is_some() && !s.auth_busy).await;

        let state = app.state.read();
        assert_eq!(state.auth.error(), Some("Invalid login credentials"));
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_validation_runs_before_request() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = app_with(&backend);

        fill_login(&app, "not-an-email", "secret123");
        app.handle_login_click();
        assert_eq!(app.state.read().auth.error(), Some("Invalid email format"));

        fill_login(&app, "ada@example.com", "12345");
        app.handle_login_click();
        let state = app.state.read();
        assert_eq!(state.auth.error(), Some("Password must be at least 6 characters"));
        assert!(!state.auth_busy);
    }

    #[tokio::test]
    async fn test_signup_mismatch_and_pending_confirmation() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = app_with(&backend);
        app.handle_switch_to_signup();

        app.state.write().auth = AuthState::Signup {
            email: "new@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            error: None,
        };
        app.handle_signup_click();
        assert_eq!(app.state.read().auth.error(), Some("Passwords don't match"));

        app.state.write().auth = AuthState::Signup {
            email: "new@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            error: None,
        };
        app.handle_signup_click();
        pump(&mut app, |s| matches!(s.auth, AuthState::Login { .. })).await;

        let state = app.state.read();
        assert!(matches!(&state.auth, AuthState::Login { email, .. } if email == "new@example.com"));
        assert_eq!(state.pending_notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_out_guards_every_protected_route() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        let mut app = signed_in_app(&backend).await;
        app.handle_route_change(Route::Wallet);
        assert_eq!(app.state.read().current_route(), Route::Wallet);

        // Act
        app.handle_sign_out_click();
        pump(&mut app, |s| !s.is_authenticated() && !s.signing_out).await;

        // Assert
        for route in Route::all() {
            app.handle_route_change(*route);
            assert_eq!(app.state.read().current_route(), Route::Auth);
        }
        assert!(app.state.read().wallets.snapshot().wallets.is_empty());
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_and_data_reloaded() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.add_wallet(user.id, "USD", Decimal::new(100, 0));
        backend.token_expired.store(true, Ordering::SeqCst);

        // Act
        let mut app = app_with(&backend);
        pump(&mut app, |s| s.is_authenticated()).await;
        app.handle_route_change(Route::Wallet);
        pump(&mut app, |s| !s.wallets.snapshot().wallets.is_empty()).await;

        // Assert
        let state = app.state.read();
        assert!(state.is_authenticated());
        assert!(!state.refreshing_session);
        assert_eq!(state.current_route(), Route::Wallet);
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejected_refresh_signs_out_to_auth() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.add_wallet(user.id, "USD", Decimal::new(100, 0));
        backend.token_expired.store(true, Ordering::SeqCst);
        backend.reject_refresh.store(true, Ordering::SeqCst);

        let expired = |s: &AppState| {
            s.pending_notifications.iter().any(|(level, message)| {
                *level == NotificationLevel::Error
                    && message == "Your session has expired. Please sign in again."
            })
        };

        // Act
        let mut app = app_with(&backend);
        pump(&mut app, |s| s.is_authenticated()).await;
        app.handle_route_change(Route::Wallet);
        pump(&mut app, |s| !s.is_authenticated() && expired(s)).await;

        // Assert
        let state = app.state.read();
        assert_eq!(state.current_route(), Route::Auth);
        assert!(state.wallets.snapshot().wallets.is_empty());
        assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_sign_out_keeps_session() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = signed_in_app(&backend).await;
        backend.fail_sign_out.store(true, Ordering::SeqCst);

        app.handle_sign_out_click();
        pump(&mut app, |s| !s.signing_out).await;

        let state = app.state.read();
        assert!(state.is_authenticated());
        assert_eq!(state.current_route(), Route::Dashboard);
        assert_eq!(state.pending_notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_dashboard_entry_loads_wallets_and_prices() {
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.add_wallet(user.id, "USD", Decimal::new(100, 0));
        backend.add_wallet(user.id, "BTC", Decimal::new(1, 2));
        backend.set_price("BTC", Decimal::new(50_000, 0));
        *backend.markup_pct.lock() = Decimal::ONE;

        let mut app = app_with(&backend);
        pump(&mut app, |s| {
            s.dashboard.prices.contains_key("BTC") && s.session.profile().is_some()
        })
        .await;

        {
            let state = app.state.read();
            let summary = crate::dashboard::summarize(
                &state.wallets.snapshot().wallets,
                &state.dashboard.prices,
            );
            assert_eq!(summary.total_usd, Decimal::new(600, 0));
        }

        // Trade quotes carry the markup, the balance total does not
        app.handle_route_change(Route::Trade);
        pump(&mut app, |s| s.trade.price.is_some()).await;
        let state = app.state.read();
        assert_eq!(state.trade.price, Some(Decimal::new(50_500, 0)));
        assert_eq!(state.dashboard.prices.get("BTC"), Some(&Decimal::new(50_000, 0)));
    }

    #[tokio::test]
    async fn test_trade_entry_fetches_price_once_per_interval() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_price("BTC", Decimal::new(50_000, 0));
        let mut app = signed_in_app(&backend).await;

        app.handle_route_change(Route::Trade);
        pump(&mut app, |s| s.trade.price.is_some()).await;
        for _ in 0..5 {
            app.on_tick();
        }

        assert_eq!(backend.price_calls.load(Ordering::SeqCst), 1);
        assert!(!app.state.read().trade.is_loading);
    }

    #[tokio::test]
    async fn test_asset_switch_fetches_new_price() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_price("BTC", Decimal::new(50_000, 0));
        backend.set_price("ETH", Decimal::new(3_000, 0));
        let mut app = signed_in_app(&backend).await;
        app.handle_route_change(Route::Trade);
        pump(&mut app, |s| s.trade.price.is_some()).await;

        app.handle_asset_select("ETH");
        assert!(app.state.read().trade.price.is_none());
        pump(&mut app, |s| s.trade.price.is_some()).await;

        assert_eq!(app.state.read().trade.price, Some(Decimal::new(3_000, 0)));
    }

    #[tokio::test]
    async fn test_withdraw_over_balance_creates_no_row() {
        // Arrange
        let backend = Arc::new(FakeBackend::new());
        let user = backend.signed_in("ada@example.com");
        backend.add_wallet(user.id, "USD", Decimal::new(100, 0));
        let mut app = app_with(&backend);
        pump(&mut app, |s| s.is_authenticated()).await;
        app.handle_route_change(Route::Wallet);
        pump(&mut app, |s| !s.wallets.snapshot().wallets.is_empty()).await;

        // Act
        app.handle_wallet_tab_change(WalletTab::Withdraw);
        app.state.write().wallet_form.amount = "150".to_string();
        app.handle_wallet_submit();
        pump(&mut app, |s| !s.wallet_form.submitting).await;

        // Assert
        assert_eq!(
            app.state.read().wallet_form.error.as_deref(),
            Some("Insufficient balance")
        );
        assert_eq!(backend.transaction_count(), 0);
    }

    #[tokio::test]
    async fn test_wallet_submit_rejects_bad_amount_and_clears_on_success() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = signed_in_app(&backend).await;

        app.state.write().wallet_form.amount = "abc".to_string();
        app.handle_wallet_submit();
        assert_eq!(
            app.state.read().wallet_form.error.as_deref(),
            Some("Please enter a valid amount")
        );

        app.state.write().wallet_form.amount = "25".to_string();
        app.handle_wallet_submit();
        pump(&mut app, |s| !s.wallet_form.submitting).await;

        let state = app.state.read();
        assert!(state.wallet_form.amount.is_empty());
        assert!(state.wallet_form.error.is_none());
        assert_eq!(backend.transaction_count(), 1);
        assert_eq!(state.wallets.snapshot().transactions.len(), 1);
    }

    #[tokio::test]
    async fn test_verification_marks_profile_pending() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = signed_in_app(&backend).await;
        app.handle_route_change(Route::Verification);
        {
            let mut state = app.state.write();
            state.verification.full_name = "Ada Obi".to_string();
            state.verification.phone_number = "+2348000000000".to_string();
            state.verification.country = "Nigeria".to_string();
        }

        app.handle_personal_info_submit();
        pump(&mut app, |s| s.verification.step == VerificationStep::Documents).await;
        app.handle_document_upload();

        let state = app.state.read();
        assert_eq!(state.verification.step, VerificationStep::Confirmed);
        let profile = state.session.profile().expect("profile cached");
        assert_eq!(profile.kyc_status, KycStatus::Pending);
        assert!(profile.kyc_submitted);
    }

    #[tokio::test]
    async fn test_settings_save_failure_is_shown() {
        let backend = Arc::new(FakeBackend::new());
        let mut app = signed_in_app(&backend).await;
        app.handle_route_change(Route::Settings);
        pump(&mut app, |s| !s.settings.email.is_empty()).await;

        backend.fail_data.store(true, Ordering::SeqCst);
        app.handle_settings_save();
        pump(&mut app, |s| s.settings.status.is_some()).await;

        assert!(matches!(
            app.state.read().settings.status,
            Some(crate::settings::SaveStatus::Failed(_))
        ));
    }
}

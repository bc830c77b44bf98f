//! In-memory backend used by the store and app tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::{
    Credentials, Identity, NewTransaction, Profile, ProfileUpdate, Session,
    SignUpResponse, Transaction, Wallet,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Notify};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::core::service::{AuthService, DataService, PriceService};
use crate::services::api::apply_markup;

pub struct FakeBackend {
    accounts: Mutex<HashMap<String, (String, Identity)>>,
    auth_tx: watch::Sender<Option<Identity>>,
    pub wallets: Mutex<Vec<Wallet>>,
    pub transactions: Mutex<Vec<Transaction>>,
    pub profiles: Mutex<HashMap<Uuid, Profile>>,
    /// Ticker prices
    pub prices: Mutex<HashMap<String, Decimal>>,
    /// Trade markup in percent, zero unless a test sets it
    pub markup_pct: Mutex<Decimal>,
    /// Every data call fails while set
    pub fail_data: AtomicBool,
    pub fail_sign_out: AtomicBool,
    /// Data calls fail with an auth error until the session is refreshed
    pub token_expired: AtomicBool,
    /// Refresh attempts end the session
    pub reject_refresh: AtomicBool,
    pub refresh_calls: AtomicUsize,
    /// Marked-up trade price lookups
    pub price_calls: AtomicUsize,
    wallet_gates: Mutex<VecDeque<Arc<Notify>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let (auth_tx, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            auth_tx,
            wallets: Mutex::new(Vec::new()),
            transactions: Mutex::new(Vec::new()),
            profiles: Mutex::new(HashMap::new()),
            prices: Mutex::new(HashMap::new()),
            markup_pct: Mutex::new(Decimal::ZERO),
            fail_data: AtomicBool::new(false),
            fail_sign_out: AtomicBool::new(false),
            token_expired: AtomicBool::new(false),
            reject_refresh: AtomicBool::new(false),
            refresh_calls: AtomicUsize::new(0),
            price_calls: AtomicUsize::new(0),
            wallet_gates: Mutex::new(VecDeque::new()),
        }
    }

    /// Register an account with an empty profile
    pub fn register(&self, email: &str, password: &str) -> Identity {
        let identity = Identity {
            id: Uuid::new_v4(),
            email: email.to_string(),
        };
        self.accounts
            .lock()
            .insert(email.to_string(), (password.to_string(), identity.clone()));
        self.profiles.lock().insert(identity.id, empty_profile(identity.id));
        identity
    }

    /// Register and mark the account as signed in
    pub fn signed_in(&self, email: &str) -> Identity {
        let identity = self.register(email, "secret123");
        self.auth_tx.send_replace(Some(identity.clone()));
        identity
    }

    pub fn add_wallet(&self, user_id: Uuid, currency: &str, balance: Decimal) {
        self.wallets.lock().push(Wallet {
            id: Uuid::new_v4(),
            user_id,
            currency: currency.to_string(),
            balance,
            kind: shared::kind_of(currency),
        });
    }

    pub fn set_price(&self, asset: &str, price: Decimal) {
        self.prices.lock().insert(asset.to_string(), price);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().len()
    }

    /// The next wallet listing snapshots its rows, then waits for `gate`
    pub fn hold_next_wallet_fetch(&self, gate: Arc<Notify>) {
        self.wallet_gates.lock().push_back(gate);
    }

    fn check_data(&self) -> Result<()> {
        if self.fail_data.load(Ordering::SeqCst) {
            return Err(AppError::Api("Network error: connection refused".to_string()));
        }
        if self.token_expired.load(Ordering::SeqCst) {
            return Err(AppError::Auth("JWT expired".to_string()));
        }
        Ok(())
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

pub fn empty_profile(id: Uuid) -> Profile {
    Profile {
        id,
        full_name: None,
        country: None,
        phone_number: None,
        referral_code: Some("REF123".to_string()),
        referral_earnings: Decimal::ZERO,
        referral_count: 0,
        kyc_status: shared::KycStatus::Unverified,
        kyc_submitted: false,
    }
}

#[async_trait]
impl AuthService for FakeBackend {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session> {
        let identity = match self.accounts.lock().get(&credentials.email) {
            Some((password, identity)) if *password == credentials.password => identity.clone(),
            _ => return Err(AppError::Auth("Invalid login credentials".to_string())),
        };
        self.auth_tx.send_replace(Some(identity.clone()));
        Ok(Session {
            access_token: "fake-token".to_string(),
            refresh_token: String::new(),
            expires_in: 3600,
            user: identity,
        })
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<SignUpResponse> {
        if self.accounts.lock().contains_key(&credentials.email) {
            return Err(AppError::Auth("User already registered".to_string()));
        }
        let identity = self.register(&credentials.email, &credentials.password);
        Ok(SignUpResponse::PendingConfirmation(identity))
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AppError::Api("Network error: connection reset".to_string()));
        }
        self.auth_tx.send_replace(None);
        Ok(())
    }

    async fn refresh_session(&self) -> Result<()> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_refresh.load(Ordering::SeqCst) {
            self.auth_tx.send_replace(None);
            return Err(AppError::Auth("Invalid Refresh Token".to_string()));
        }
        self.token_expired.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.auth_tx.subscribe()
    }
}

#[async_trait]
impl DataService for FakeBackend {
    async fn list_wallets(&self, user_id: Uuid) -> Result<Vec<Wallet>> {
        self.check_data()?;
        let rows: Vec<Wallet> = self
            .wallets
            .lock()
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        let gate = self.wallet_gates.lock().pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(rows)
    }

    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        self.check_data()?;
        let mut rows: Vec<Transaction> = self
            .transactions
            .lock()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        self.check_data()?;
        let row = Transaction {
            id: Uuid::new_v4(),
            user_id: transaction.user_id,
            kind: transaction.kind,
            amount: transaction.amount,
            currency: transaction.currency,
            status: transaction.status,
            payment_type: transaction.payment_type,
            created_at: Utc::now(),
        };
        self.transactions.lock().push(row.clone());
        Ok(row)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Profile> {
        self.check_data()?;
        self.profiles
            .lock()
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::Api("No profile row returned".to_string()))
    }

    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Profile> {
        self.check_data()?;
        let mut profiles = self.profiles.lock();
        let profile = profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::Api("No profile row returned".to_string()))?;
        update.apply_to(profile);
        Ok(profile.clone())
    }
}

#[async_trait]
impl PriceService for FakeBackend {
    async fn price_usd(&self, asset: &str) -> Result<Decimal> {
        self.price_calls.fetch_add(1, Ordering::SeqCst);
        let market = self.market_price_usd(asset).await?;
        Ok(apply_markup(market, *self.markup_pct.lock()))
    }

    async fn market_price_usd(&self, asset: &str) -> Result<Decimal> {
        self.prices
            .lock()
            .get(asset)
            .copied()
            .ok_or_else(|| AppError::Api(format!("HTTP 400: Invalid symbol {}USDT", asset)))
    }
}


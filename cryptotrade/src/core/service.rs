//! # Service Traits
//!
//! Seams between the stores and the remote services. The HTTP client
//! implements all three; tests use the in-memory fakes in `services::fake`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    Credentials, Identity, NewTransaction, Profile, ProfileUpdate, Session, SignUpResponse,
    Transaction, Wallet,
};
use tokio::sync::watch;
use uuid::Uuid;

use super::error::Result;

/// Hosted authentication provider.
///
/// Sign-in does not hand the identity to the caller directly. Subscribers
/// learn about it through [`AuthService::subscribe`], the same way a session
/// restored at startup or ended elsewhere is reported.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session>;

    async fn sign_up(&self, credentials: Credentials) -> Result<SignUpResponse>;

    async fn sign_out(&self) -> Result<()>;

    /// Renew the access token of the active session.
    ///
    /// A rejected refresh ends the session: subscribers see `None`.
    async fn refresh_session(&self) -> Result<()>;

    /// Auth state changes. The current value is the active identity.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

/// Row storage for wallets, transactions and profiles
#[async_trait]
pub trait DataService: Send + Sync {
    async fn list_wallets(&self, user_id: Uuid) -> Result<Vec<Wallet>>;

    /// Newest first
    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>>;

    /// Insert and return the stored row
    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction>;

    async fn get_profile(&self, user_id: Uuid) -> Result<Profile>;

    /// Partial update by owner id, returning the updated row
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Profile>;
}

/// Spot price lookup
#[async_trait]
pub trait PriceService: Send + Sync {
    /// USD price of one unit of `asset`, markup included
    async fn price_usd(&self, asset: &str) -> Result<Decimal>;

    /// Ticker price of one unit of `asset` in USD, without markup
    async fn market_price_usd(&self, asset: &str) -> Result<Decimal>;
}

//! # Backend API Client Module
//!
//! HTTP client for the hosted backend (auth API, table API) and the price API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and service trait implementations
//! ├── client.rs   - ApiClient struct, session handling, error mapping
//! ├── auth.rs     - Sign-in, sign-up, token refresh, sign-out
//! ├── data.rs     - Wallet, transaction and profile rows
//! └── price.rs    - Spot price lookup with markup
//! ```

pub mod auth;
pub mod client;
pub mod data;
pub mod price;

pub use client::ApiClient;
pub use price::apply_markup;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::{
    Credentials, Identity, NewTransaction, Profile, ProfileUpdate, Session, SignUpResponse,
    Transaction, Wallet,
};
use tokio::sync::watch;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::service::{AuthService, DataService, PriceService};

#[async_trait]
impl AuthService for ApiClient {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session> {
        auth::sign_in(self, credentials).await
    }

    async fn sign_up(&self, credentials: Credentials) -> Result<SignUpResponse> {
        auth::sign_up(self, credentials).await
    }

    async fn sign_out(&self) -> Result<()> {
        auth::sign_out(self).await
    }

    async fn refresh_session(&self) -> Result<()> {
        auth::refresh_session(self).await
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.subscribe_auth()
    }
}

#[async_trait]
impl DataService for ApiClient {
    async fn list_wallets(&self, user_id: Uuid) -> Result<Vec<Wallet>> {
        data::list_wallets(self, user_id).await
    }

    async fn list_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        data::list_transactions(self, user_id).await
    }

    async fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        data::insert_transaction(self, transaction).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<Profile> {
        data::get_profile(self, user_id).await
    }

    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> Result<Profile> {
        data::update_profile(self, user_id, update).await
    }
}

#[async_trait]
impl PriceService for ApiClient {
    async fn price_usd(&self, asset: &str) -> Result<Decimal> {
        price::get_price(self, asset).await
    }

    async fn market_price_usd(&self, asset: &str) -> Result<Decimal> {
        price::get_market_price(self, asset).await
    }
}

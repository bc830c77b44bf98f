//! # Application Events
//!
//! Results of background tasks, sent to the UI thread over the event channel.

use rust_decimal::Decimal;
use shared::{Identity, Profile, SignUpResponse, Transaction, TransactionKind};
use std::collections::HashMap;

use crate::core::error::Result;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Identity reported by the auth service (sign-in, sign-up, sign-out)
    AuthStateChanged(Option<Identity>),
    SignInResult(Result<()>),
    SignUpResult(Result<SignUpResponse>),
    SignOutResult(Result<()>),
    /// Token refresh after a request was rejected as unauthenticated
    SessionRefreshed(Result<()>),
    ProfileLoaded(Result<Profile>),
    WalletsRefreshed(Result<()>),
    TransactionsRefreshed(Result<()>),
    WalletActionResult {
        kind: TransactionKind,
        result: Result<Transaction>,
    },
    TradePriceResult {
        asset: String,
        result: Result<Decimal>,
    },
    /// USD prices of held crypto, for the dashboard total
    DashboardPrices(HashMap<String, Decimal>),
    VerificationSaved(Result<()>),
    SettingsSaved(Result<()>),
}

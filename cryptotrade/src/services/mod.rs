//! # Services Module
//!
//! Remote service integrations for the CryptoTrade client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 CryptoTrade client                      │
//! │                                                         │
//! │   SessionStore        WalletStore        Trade screen   │
//! │        │                   │                  │         │
//! │   AuthService         DataService        PriceService   │
//! │        └───────────────────┼──────────────────┘         │
//! │                       ApiClient                         │
//! └───────────────────────────┼─────────────────────────────┘
//!              ┌──────────────┴──────────────┐
//!              │ HTTP/JSON                   │ HTTP/JSON
//!              ▼                             ▼
//! ┌─────────────────────────┐   ┌──────────────────────────┐
//! │  Hosted backend         │   │  Price API               │
//! │  /auth/v1/*  (auth)     │   │  /api/v3/ticker/price    │
//! │  /rest/v1/*  (tables)   │   │                          │
//! └─────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! All calls return [`crate::core::Result`]:
//! - Network and parse failures: `AppError::Api("Network error: ...")`
//! - Rejected credentials: `AppError::Auth(<backend message>)`
//! - Other HTTP failures: `AppError::Api("HTTP <status>: <backend message>")`
//!
//! No retries, backoff or circuit breaking; callers surface the error.

pub mod api;

#[cfg(test)]
pub mod fake;

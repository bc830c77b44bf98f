//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the hosted backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Sign-in/sign-up credentials, sessions, identities, auth errors
//! - [`profile`] - Profile rows (KYC, referral data) and partial updates
//! - [`wallet`] - Wallet and transaction rows, insert payloads
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /rest/v1/transactions
//! Prefer: return=representation
//!
//! {
//!   "user_id": "7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d",
//!   "type": "deposit",
//!   "amount": "250",
//!   "currency": "USD",
//!   "status": "pending",
//!   "payment_type": "fiat"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//!
//! [{
//!   "id": "0b9f...",
//!   "user_id": "7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d",
//!   "type": "deposit",
//!   "amount": 250,
//!   "currency": "USD",
//!   "status": "pending",
//!   "payment_type": "fiat",
//!   "created_at": "2024-05-01T12:00:00+00:00"
//! }]
//! ```

pub mod auth;
pub mod profile;
pub mod wallet;

pub use auth::*;
pub use profile::*;
pub use wallet::*;

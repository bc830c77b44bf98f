//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CryptoTrade client and the
//! hosted backend (auth API, table API). All DTOs use JSON serialization via
//! `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Credentials, sessions and identities
//!   - **[`dto::profile`]**: Profile rows and partial profile updates
//!   - **[`dto::wallet`]**: Wallet rows, transaction rows and their enums
//! - **[`utils`]**: Currency tables and balance formatting
//!
//! ## Wire Format
//!
//! - Field names are **snake_case**, matching the backend's column names
//! - Enums serialize to **lowercase** strings (`"fiat"`, `"pending"`, ...)
//! - The `kind` fields of wallets and transactions travel as `"type"`
//! - Decimal amounts deserialize from JSON numbers or strings
//!
//! ## Usage
//!
//! ```rust
//! use shared::{format_balance, CurrencyKind, kind_of};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(kind_of("USD"), CurrencyKind::Fiat);
//! assert_eq!(format_balance(Decimal::new(150050, 2), "USD"), "$1,500.50");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;

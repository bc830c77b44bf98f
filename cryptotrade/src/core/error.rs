//! # Common Error Types
//!
//! Consolidated error handling for the CryptoTrade client.
//!
//! ## Error Categories
//!
//! - **Validation**: Input rejected before any remote call (minimum amounts, empty fields)
//! - **Auth**: Rejected credentials, or an operation that needs a signed-in identity
//! - **InsufficientBalance**: Withdrawal or trade exceeding the cached balance
//! - **Api**: Network, HTTP and JSON failures talking to the backend or price API
//! - **State**: Invalid state transitions (wizard steps out of order)
//!
//! ## Usage Pattern
//!
//! ```rust
//! use cryptotrade::core::error::{AppError, Result};
//!
//! fn validate_amount(amount: f64) -> Result<f64> {
//!     if amount <= 0.0 {
//!         return Err(AppError::Validation("Please enter a valid amount".to_string()));
//!     }
//!     Ok(amount)
//! }
//!
//! assert!(validate_amount(0.0).is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Each variant carries a message meant to be shown to the user as-is via
/// [`AppError::user_message`]; `Display` adds the category prefix for logs.
///
/// ```rust
/// use cryptotrade::core::error::AppError;
///
/// let err = AppError::Validation("Minimum deposit amount is $1".to_string());
/// assert_eq!(err.to_string(), "Validation error: Minimum deposit amount is $1");
/// assert_eq!(err.user_message(), "Minimum deposit amount is $1");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials rejected by the auth API, or no signed-in identity.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Requested amount exceeds the cached wallet balance.
    #[error("Insufficient balance: {0}")]
    InsufficientBalance(String),

    /// Backend or price API communication error.
    ///
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors other than auth rejections
    /// - JSON parsing errors (malformed responses)
    #[error("API error: {0}")]
    Api(String),

    /// Application state management error.
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// Error raised when an operation needs a signed-in identity
    pub fn not_authenticated() -> Self {
        AppError::Auth("User not authenticated".to_string())
    }

    /// Message without the category prefix, for inline display
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Auth(msg)
            | AppError::InsufficientBalance(msg)
            | AppError::Api(msg)
            | AppError::State(msg) => msg,
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("Failed to parse response: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_strips_category() {
        let err = AppError::InsufficientBalance("Insufficient balance".to_string());
        assert_eq!(err.user_message(), "Insufficient balance");
        assert_eq!(err.to_string(), "Insufficient balance: Insufficient balance");
    }

    #[test]
    fn test_not_authenticated() {
        assert_eq!(
            AppError::not_authenticated(),
            AppError::Auth("User not authenticated".to_string())
        );
    }
}

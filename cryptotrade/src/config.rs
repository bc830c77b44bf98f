//! # Client Configuration
//!
//! Backend endpoints, price source and timing, read from the environment.
//! A `.env` file in the working directory is loaded first (see `main.rs`).
//!
//! | Variable | Default |
//! |---|---|
//! | `CRYPTOTRADE_API_URL` | required |
//! | `CRYPTOTRADE_ANON_KEY` | required |
//! | `CRYPTOTRADE_PRICE_API_URL` | `https://api.binance.com` |
//! | `CRYPTOTRADE_PRICE_MARKUP_PCT` | `1` |
//! | `CRYPTOTRADE_REFRESH_SECS` | `30` |
//! | `CRYPTOTRADE_HTTP_TIMEOUT_SECS` | `10` |

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PRICE_API_URL: &str = "https://api.binance.com";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Project URL; auth lives under `/auth/v1`, tables under `/rest/v1`
    pub api_url: String,
    /// Public anon key sent as `apikey` on every backend request
    pub anon_key: String,
    pub price_api_url: String,
    /// Percentage added on top of the quoted market price
    pub price_markup_pct: Decimal,
    /// Dashboard and trade screen refresh period
    pub refresh_interval: Duration,
    pub http_timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CRYPTOTRADE_API_URL")
            .ok_or("CRYPTOTRADE_API_URL must be set in environment")?;

        let anon_key = lookup("CRYPTOTRADE_ANON_KEY")
            .ok_or("CRYPTOTRADE_ANON_KEY must be set in environment")?;

        let price_api_url = lookup("CRYPTOTRADE_PRICE_API_URL")
            .unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string());

        let price_markup_pct = Decimal::from_str(
            &lookup("CRYPTOTRADE_PRICE_MARKUP_PCT").unwrap_or_else(|| "1".to_string()),
        )
        .map_err(|_| "CRYPTOTRADE_PRICE_MARKUP_PCT must be a valid number")?;

        let refresh_secs: u64 = lookup("CRYPTOTRADE_REFRESH_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| "CRYPTOTRADE_REFRESH_SECS must be a valid number")?;

        let timeout_secs: u64 = lookup("CRYPTOTRADE_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| "CRYPTOTRADE_HTTP_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            anon_key,
            price_api_url: price_api_url.trim_end_matches('/').to_string(),
            price_markup_pct,
            refresh_interval: Duration::from_secs(refresh_secs),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("CRYPTOTRADE_API_URL must not be empty".to_string());
        }

        if self.anon_key.is_empty() {
            return Err("CRYPTOTRADE_ANON_KEY must not be empty".to_string());
        }

        if self.price_api_url.is_empty() {
            return Err("CRYPTOTRADE_PRICE_API_URL must not be empty".to_string());
        }

        if self.price_markup_pct.is_sign_negative() {
            return Err("CRYPTOTRADE_PRICE_MARKUP_PCT must not be negative".to_string());
        }

        if self.refresh_interval.is_zero() {
            return Err("CRYPTOTRADE_REFRESH_SECS must be at least 1".to_string());
        }

        if self.http_timeout.is_zero() {
            return Err("CRYPTOTRADE_HTTP_TIMEOUT_SECS must be at least 1".to_string());
        }

        Ok(())
    }
}

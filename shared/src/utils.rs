//! # Currency Tables and Formatting
//!
//! Currency code tables used by the wallet and trade screens, plus the
//! display formatting for balances.
//!
//! - Fiat codes render with their symbol, thousands separators and 2 decimals
//! - Every other code renders with 8 decimals and no grouping
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_balance, currency_symbol};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(currency_symbol("GBP"), "£");
//! assert_eq!(format_balance(Decimal::new(25, 4), "BTC"), "0.00250000");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

use crate::dto::CurrencyKind;

/// Fiat currencies a wallet can hold
pub const FIAT_CURRENCIES: &[&str] = &["NGN", "USD", "GBP"];

/// Crypto currencies a wallet can hold
pub const CRYPTO_CURRENCIES: &[&str] = &[
    "BTC", "ETH", "LTC", "DOGE", "ADA", "SUI", "TRX", "USDT", "BNB", "TON",
];

/// Assets offered on the trade screen, priced against USDT
pub const TRADE_ASSETS: &[&str] = &["BTC", "ETH", "LTC", "DOGE", "ADA", "SUI", "TRX", "BNB"];

/// Currency codes for a payment type
pub fn currencies_for(kind: CurrencyKind) -> &'static [&'static str] {
    match kind {
        CurrencyKind::Fiat => FIAT_CURRENCIES,
        CurrencyKind::Crypto => CRYPTO_CURRENCIES,
    }
}

/// Fiat when the code is a known fiat currency, crypto otherwise
pub fn kind_of(code: &str) -> CurrencyKind {
    if FIAT_CURRENCIES.contains(&code) {
        CurrencyKind::Fiat
    } else {
        CurrencyKind::Crypto
    }
}

/// Display symbol for fiat codes; empty for everything else
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "NGN" => "₦",
        "USD" => "$",
        "GBP" => "£",
        _ => "",
    }
}

/// Format a balance for display.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_balance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_balance(Decimal::new(1_234_567_891, 3), "NGN"), "₦1,234,567.89");
/// assert_eq!(format_balance(Decimal::ONE, "ETH"), "1.00000000");
/// ```
pub fn format_balance(amount: Decimal, code: &str) -> String {
    match kind_of(code) {
        CurrencyKind::Fiat => format!("{}{}", currency_symbol(code), group_thousands(amount, 2)),
        CurrencyKind::Crypto => format_fixed(amount, 8),
    }
}

/// USD amount with `$`, grouping and 2 decimals
pub fn format_usd(amount: Decimal) -> String {
    format_balance(amount, "USD")
}

/// Round half away from zero and render exactly `dp` decimals
pub fn format_fixed(amount: Decimal, dp: u32) -> String {
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

fn group_thousands(amount: Decimal, dp: u32) -> String {
    let fixed = format_fixed(amount, dp);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of("NGN"), CurrencyKind::Fiat);
        assert_eq!(kind_of("USDT"), CurrencyKind::Crypto);
        assert_eq!(kind_of("XYZ"), CurrencyKind::Crypto);
    }

    #[test]
    fn test_format_fiat() {
        assert_eq!(format_balance(Decimal::ZERO, "USD"), "$0.00");
        assert_eq!(format_balance(Decimal::new(999, 0), "GBP"), "£999.00");
        assert_eq!(format_balance(Decimal::new(1000, 0), "USD"), "$1,000.00");
        assert_eq!(format_balance(Decimal::new(1_000_000_005, 3), "USD"), "$1,000,000.01");
    }

    #[test]
    fn test_format_crypto() {
        assert_eq!(format_balance(Decimal::new(12345, 0), "BTC"), "12345.00000000");
        assert_eq!(format_balance(Decimal::new(123456789, 9), "ETH"), "0.12345679");
    }

    #[test]
    fn test_format_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(Decimal::new(5, 3), 2), "0.01");
        assert_eq!(format_fixed(Decimal::new(-5, 3), 2), "-0.01");
        assert_eq!(format_fixed(Decimal::new(15, 1), 0), "2");
    }

    #[test]
    fn test_negative_grouping() {
        assert_eq!(format_usd(Decimal::new(-123456, 2)), "$-1,234.56");
    }

    #[test]
    fn test_currencies_for() {
        assert_eq!(currencies_for(CurrencyKind::Fiat), FIAT_CURRENCIES);
        assert!(currencies_for(CurrencyKind::Crypto).contains(&"TON"));
    }
}

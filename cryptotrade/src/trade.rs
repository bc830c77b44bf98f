//! # Trade Form
//!
//! Buy/sell form state with linked asset and USD amounts.
//!
//! Editing one amount recomputes the other from the current price:
//!
//! ```text
//! usd   = round(asset × price, 2)
//! asset = round(usd / price, 8)
//! ```
//!
//! Rounding is half away from zero. A 6% fee applies to the USD amount; a buy
//! costs `usd + fee` and a sell yields `usd - fee`.
//!
//! Submitting only records a [`TradeIntent`] in the log and in the session's
//! intent list. No order reaches the backend.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{format_fixed, TRADE_ASSETS};
use std::str::FromStr;

use crate::core::error::{AppError, Result};
use crate::stores::WalletData;
use crate::utils::validation::parse_positive_amount;

/// Fee charged on the USD amount of every trade (6%)
pub const TRANSACTION_FEE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

const INVALID_AMOUNT: &str = "Please enter a valid amount";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradeAction {
    #[default]
    Buy,
    Sell,
}

impl TradeAction {
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Sell => "Sell",
        }
    }
}

/// Priced breakdown of the current form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeQuote {
    pub amount: Decimal,
    pub usd: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
}

/// A validated trade the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeIntent {
    pub action: TradeAction,
    pub asset: String,
    pub amount: Decimal,
    pub usd: Decimal,
    pub fee: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// `None` when the fee does not fit in a `Decimal`
pub fn fee_for(usd: Decimal) -> Option<Decimal> {
    usd.checked_mul(TRANSACTION_FEE)
}

/// Buy total is `usd + fee`, sell total is `usd - fee`
pub fn total_for(action: TradeAction, usd: Decimal) -> Option<Decimal> {
    let fee = fee_for(usd)?;
    match action {
        TradeAction::Buy => usd.checked_add(fee),
        TradeAction::Sell => usd.checked_sub(fee),
    }
}

/// USD value of `amount` units, 2 decimals
pub fn linked_usd(amount: Decimal, price: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(price)
        .map(|v| v.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Units bought by `usd`, 8 decimals
pub fn linked_asset(usd: Decimal, price: Decimal) -> Option<Decimal> {
    usd.checked_div(price)
        .map(|v| v.round_dp_with_strategy(8, RoundingStrategy::MidpointAwayFromZero))
}

fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}

#[derive(Debug, Clone)]
pub struct TradeForm {
    pub asset: String,
    pub action: TradeAction,
    pub amount: String,
    pub usd_amount: String,
    pub price: Option<Decimal>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Intents submitted this session, newest last
    pub intents: Vec<TradeIntent>,
}

impl Default for TradeForm {
    fn default() -> Self {
        Self {
            asset: TRADE_ASSETS[0].to_string(),
            action: TradeAction::Buy,
            amount: String::new(),
            usd_amount: String::new(),
            price: None,
            is_loading: false,
            error: None,
            intents: Vec::new(),
        }
    }
}

impl TradeForm {
    /// Edit the asset amount. Ignored until a price is known.
    pub fn set_asset_amount(&mut self, text: String) {
        let Some(price) = self.price else { return };
        self.usd_amount = parse_amount(&text)
            .and_then(|amount| linked_usd(amount, price))
            .map(|usd| format_fixed(usd, 2))
            .unwrap_or_default();
        self.amount = text;
    }

    /// Edit the USD amount. Ignored until a price is known.
    pub fn set_usd_amount(&mut self, text: String) {
        let Some(price) = self.price else { return };
        self.amount = parse_amount(&text)
            .and_then(|usd| linked_asset(usd, price))
            .map(|amount| format_fixed(amount, 8))
            .unwrap_or_default();
        self.usd_amount = text;
    }

    /// Switch asset. The old price no longer applies.
    pub fn select_asset(&mut self, asset: &str) {
        if self.asset == asset {
            return;
        }
        self.asset = asset.to_string();
        self.price = None;
        self.amount.clear();
        self.usd_amount.clear();
        self.error = None;
    }

    pub fn set_action(&mut self, action: TradeAction) {
        self.action = action;
        self.error = None;
    }

    /// Price arrived for `asset`; stale answers for another asset are ignored
    pub fn set_price(&mut self, asset: &str, price: Decimal) {
        if self.asset == asset {
            self.price = Some(price);
        }
    }

    /// Both amounts must be positive and the totals must fit in a `Decimal`
    pub fn quote(&self) -> Result<TradeQuote> {
        let invalid = || AppError::Validation(INVALID_AMOUNT.to_string());
        if self.price.is_none() {
            return Err(invalid());
        }
        let amount = parse_positive_amount(&self.amount).map_err(AppError::Validation)?;
        let usd = parse_positive_amount(&self.usd_amount).map_err(AppError::Validation)?;
        let fee = fee_for(usd).ok_or_else(invalid)?;
        let total = total_for(self.action, usd).ok_or_else(invalid)?;
        Ok(TradeQuote {
            amount,
            usd,
            fee,
            total,
        })
    }

    pub fn can_submit(&self) -> bool {
        self.price.is_some() && !self.amount.is_empty() && !self.usd_amount.is_empty()
    }

    /// Message for amounts that are filled in but cannot be quoted
    pub fn amount_error(&self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.quote().err().map(|e| e.user_message().to_string())
    }

    /// Buy checks the total against the USD wallet, sell checks the amount
    /// against the asset wallet. Lookups are by currency only.
    pub fn check_balance(&self, quote: &TradeQuote, wallets: &WalletData) -> Result<()> {
        match self.action {
            TradeAction::Buy => {
                if quote.total > wallets.balance_of("USD") {
                    return Err(AppError::InsufficientBalance(
                        "Insufficient USD balance".to_string(),
                    ));
                }
            }
            TradeAction::Sell => {
                if quote.amount > wallets.balance_of(&self.asset) {
                    return Err(AppError::InsufficientBalance(format!(
                        "Insufficient {} balance",
                        self.asset
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate and record the trade intent
    pub fn submit(&mut self, wallets: &WalletData) -> Result<TradeIntent> {
        let quote = match self.quote() {
            Ok(quote) => quote,
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                return Err(e);
            }
        };

        if let Err(e) = self.check_balance(&quote, wallets) {
            self.error = Some(e.user_message().to_string());
            return Err(e);
        }

        let intent = TradeIntent {
            action: self.action,
            asset: self.asset.clone(),
            amount: quote.amount,
            usd: quote.usd,
            fee: quote.fee,
            total: quote.total,
            created_at: Utc::now(),
        };

        tracing::info!(
            action = intent.action.label(),
            asset = %intent.asset,
            amount = %intent.amount,
            usd = %intent.usd,
            fee = %intent.fee,
            total = %intent.total,
            "Trade intent recorded"
        );

        self.error = None;
        self.intents.push(intent.clone());
        Ok(intent)
    }
}

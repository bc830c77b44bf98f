//! # Price Endpoint
//!
//! Spot prices quoted against USDT. Trade quotes carry the configured markup;
//! balance valuation uses the ticker price as-is.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use super::client::{error_from_response, ApiClient};
use crate::core::error::{AppError, Result};

/// Ticker response; the price arrives as a decimal string
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String,
}

/// `price × (1 + markup_pct / 100)`
pub fn apply_markup(price: Decimal, markup_pct: Decimal) -> Decimal {
    price * (Decimal::ONE + markup_pct / Decimal::ONE_HUNDRED)
}

#[tracing::instrument(skip(client))]
pub async fn get_market_price(client: &ApiClient, asset: &str) -> Result<Decimal> {
    let symbol = format!("{}USDT", asset.to_uppercase());
    let response = client
        .client
        .get(format!("{}/api/v3/ticker/price", client.config.price_api_url))
        .query(&[("symbol", symbol.as_str())])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(error_from_response(response, false).await);
    }

    let ticker = response.json::<TickerPrice>().await?;
    let market = Decimal::from_str(&ticker.price)
        .map_err(|e| AppError::Api(format!("Invalid price '{}': {}", ticker.price, e)))?;
    tracing::debug!(symbol = %ticker.symbol, market = %market, "Fetched ticker price");
    Ok(market)
}

/// Ticker price with the trade markup
pub async fn get_price(client: &ApiClient, asset: &str) -> Result<Decimal> {
    let market = get_market_price(client, asset).await?;
    Ok(apply_markup(market, client.config.price_markup_pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_markup() {
        assert_eq!(
            apply_markup(Decimal::new(50_000, 0), Decimal::ONE),
            Decimal::new(50_500, 0)
        );
        assert_eq!(apply_markup(Decimal::new(2, 0), Decimal::ZERO), Decimal::new(2, 0));
    }

    #[test]
    fn test_ticker_body() {
        let ticker: TickerPrice =
            serde_json::from_str(r#"{"symbol":"BTCUSDT","price":"64250.12000000"}"#).unwrap();
        assert_eq!(Decimal::from_str(&ticker.price).unwrap(), Decimal::new(6_425_012, 2));
    }
}

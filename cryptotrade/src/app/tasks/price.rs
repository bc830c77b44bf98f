//! # Price Tasks
//!
//! Spot price lookups for the trade form and the dashboard total.

use async_channel::Sender;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::spawn;
use tokio::task::JoinSet;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::dashboard::assets_to_price;

/// Fetch the price of the asset selected in the trade form.
///
/// Skipped while a fetch for the same asset is in flight.
pub(crate) fn fetch_trade_price(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (service, asset) = {
        let mut state = state.write();
        let asset = state.trade.asset.clone();
        if state.price_fetching.as_deref() == Some(asset.as_str()) {
            return;
        }
        state.price_fetching = Some(asset.clone());
        state.trade.is_loading = true;
        (state.price_service.clone(), asset)
    };

    spawn(async move {
        let result = service.price_usd(&asset).await;
        let _ = event_tx.send(AppEvent::TradePriceResult { asset, result }).await;
    });
}

/// Fetch ticker prices of every crypto currency held, concurrently.
///
/// Balances are valued without the trade markup. Currencies whose lookup
/// fails are left out of the result.
pub(crate) fn fetch_dashboard_prices(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (service, assets) = {
        let state = state.read();
        let wallets = state.wallets.snapshot().wallets;
        (state.price_service.clone(), assets_to_price(&wallets))
    };
    if assets.is_empty() {
        return;
    }

    spawn(async move {
        let mut lookups = JoinSet::new();
        for asset in assets {
            let service = service.clone();
            lookups.spawn(async move {
                let result = service.market_price_usd(&asset).await;
                (asset, result)
            });
        }

        let mut prices = HashMap::new();
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((asset, Ok(price))) => {
                    prices.insert(asset, price);
                }
                Ok((asset, Err(e))) => {
                    tracing::warn!(asset = %asset, error = %e, "Price unavailable for balance total");
                }
                Err(e) => tracing::error!(error = %e, "Price lookup task failed"),
            }
        }

        tracing::debug!(count = prices.len(), "Dashboard prices fetched");
        let _ = event_tx.send(AppEvent::DashboardPrices(prices)).await;
    });
}

//! # App Trait
//!
//! The actions screen renderers may trigger. Screens take `&mut impl AppLike`
//! so they can be driven without the full [`App`](crate::app::App).

use parking_lot::RwLock;
use shared::CurrencyKind;
use std::sync::Arc;

use crate::app::{AppState, Route, WalletTab};
use crate::settings::SettingsTab;
use crate::trade::TradeAction;

pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Navigation
    fn handle_route_change(&mut self, route: Route);
    fn open_wallet_tab(&mut self, tab: WalletTab);

    // Auth
    fn handle_login_click(&mut self);
    fn handle_signup_click(&mut self);
    fn handle_switch_to_login(&mut self);
    fn handle_switch_to_signup(&mut self);
    fn handle_sign_out_click(&mut self);

    // Dashboard
    fn handle_referral_copied(&mut self);

    // Trade
    fn handle_asset_select(&mut self, asset: &str);
    fn handle_action_change(&mut self, action: TradeAction);
    fn handle_price_refresh(&mut self);
    fn handle_trade_submit(&mut self);

    // Wallet
    fn handle_wallet_tab_change(&mut self, tab: WalletTab);
    fn handle_payment_kind_change(&mut self, kind: CurrencyKind);
    fn handle_wallet_submit(&mut self);

    // Verification
    fn handle_personal_info_submit(&mut self);
    fn handle_document_upload(&mut self);

    // Settings
    fn handle_settings_tab_change(&mut self, tab: SettingsTab);
    fn handle_settings_save(&mut self);
    fn handle_preferences_save(&mut self);
}

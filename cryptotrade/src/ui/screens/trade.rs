//! # Trade Screen
//!
//! Buy/sell form with linked asset and USD amounts, fee breakdown and the
//! trades recorded this session.

use rust_decimal::Decimal;
use shared::utils::{format_balance, format_usd};
use shared::TRADE_ASSETS;

use crate::app::{AppLike, AppState};
use crate::trade::{TradeAction, TradeForm, TradeIntent};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::{layouts, tables};

const FIELD_SIZE: [f32; 2] = [FIELD_WIDTH, 32.0];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let trade = &state.trade;

    egui::ScrollArea::vertical().show(ui, |ui| {
        layouts::render_split_layout(
            ui,
            |ui| render_form(ui, state, app, &theme),
            |ui| render_intents(ui, trade, &theme),
        );
    });
}

fn render_form(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike, theme: &Theme) {
    let trade = &state.trade;

    layouts::render_panel(ui, None, |ui| {
        forms::render_form_heading(ui, "Buy/Sell Crypto", theme);

        if let Some(action) = forms::render_segmented(
            ui,
            &[TradeAction::Buy, TradeAction::Sell],
            trade.action,
            |a| a.label().to_string(),
        ) {
            app.handle_action_change(action);
        }
        ui.add_space(10.0);

        ui.label("Asset");
        let mut selected = None;
        egui::ComboBox::from_id_salt("trade_asset")
            .selected_text(trade.asset.as_str())
            .width(FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for &asset in TRADE_ASSETS {
                    if ui.selectable_label(trade.asset == asset, asset).clicked() {
                        selected = Some(asset);
                    }
                }
            });
        if let Some(asset) = selected {
            app.handle_asset_select(asset);
        }
        ui.add_space(10.0);

        render_price(ui, trade, app, theme);
        ui.add_space(10.0);

        render_amounts(ui, trade, app);
        ui.add_space(10.0);

        render_breakdown(ui, state, theme);
        ui.add_space(10.0);

        if let Some(err) = trade.error.clone().or_else(|| trade.amount_error()) {
            forms::render_error(ui, &err, theme);
        }

        let label = format!("{} {}", trade.action.label(), trade.asset);
        if forms::render_primary_button(ui, &label, trade.can_submit(), theme, FIELD_WIDTH) {
            app.handle_trade_submit();
        }
    });
}

fn render_price(ui: &mut egui::Ui, trade: &TradeForm, app: &mut impl AppLike, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.dim, "Current Price");
        let price = match (trade.price, trade.is_loading) {
            (Some(price), _) => format_usd(price),
            (None, true) => "Loading...".to_string(),
            (None, false) => "---".to_string(),
        };
        ui.label(egui::RichText::new(price).size(18.0).strong());
        if ui
            .add_enabled(!trade.is_loading, egui::Button::new("⟳"))
            .on_hover_text("Refresh price")
            .clicked()
        {
            app.handle_price_refresh();
        }
    });
    forms::render_hint(ui, "Price includes 1% markup", theme);
}

fn render_amounts(ui: &mut egui::Ui, trade: &TradeForm, app: &mut impl AppLike) {
    let priced = trade.price.is_some();
    let mut amount = trade.amount.clone();
    let mut usd_amount = trade.usd_amount.clone();

    ui.add_enabled_ui(priced, |ui| {
        let asset_response = forms::render_text_input(
            ui,
            &format!("Amount in {}", trade.asset),
            &mut amount,
            "0.00000000",
            false,
            FIELD_SIZE,
        );
        if asset_response.changed() {
            app.state().write().trade.set_asset_amount(amount.clone());
        }
        ui.add_space(8.0);

        let usd_response =
            forms::render_text_input(ui, "Amount in USD", &mut usd_amount, "0.00", false, FIELD_SIZE);
        if usd_response.changed() {
            app.state().write().trade.set_usd_amount(usd_amount.clone());
        }
    });
}

fn render_breakdown(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let trade = &state.trade;
    let wallets = state.wallets.snapshot();
    let quote = trade.quote();

    let available = match trade.action {
        TradeAction::Buy => (
            "Available USD".to_string(),
            format_usd(wallets.balance_of("USD")),
        ),
        TradeAction::Sell => (
            format!("Available {}", trade.asset),
            format_balance(wallets.balance_of(&trade.asset), &trade.asset),
        ),
    };
    forms::render_summary_row(ui, &available.0, &available.1, theme);

    let (fee, total) = quote.map(|q| (q.fee, q.total)).unwrap_or((Decimal::ZERO, Decimal::ZERO));
    forms::render_summary_row(ui, "Transaction Fee (6%)", &format_usd(fee), theme);

    let total_label = match trade.action {
        TradeAction::Buy => "Total Cost",
        TradeAction::Sell => "Total Received",
    };
    ui.separator();
    forms::render_summary_row(ui, total_label, &format_usd(total), theme);
}

fn render_intents(ui: &mut egui::Ui, trade: &TradeForm, theme: &Theme) {
    layouts::render_panel(ui, Some("Trade Requests"), |ui| {
        tables::render_list(
            ui,
            "trade_intents",
            &["Side", "Asset", "Amount", "Total", "Time"],
            trade.intents.iter().rev(),
            "No trades this session",
            theme,
            |ui, intent: &TradeIntent| {
                let color = match intent.action {
                    TradeAction::Buy => theme.success,
                    TradeAction::Sell => theme.error,
                };
                ui.colored_label(color, intent.action.label());
                ui.label(&intent.asset);
                ui.monospace(intent.amount.normalize().to_string());
                ui.monospace(format_usd(intent.total));
                ui.colored_label(theme.dim, intent.created_at.format("%H:%M:%S").to_string());
            },
        );
    });
}

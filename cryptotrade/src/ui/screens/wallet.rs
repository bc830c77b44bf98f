//! # Wallet Screen
//!
//! Wallet balances, the deposit/withdraw form and the full transaction
//! history.

use shared::utils::{currencies_for, format_balance};
use shared::{CurrencyKind, Wallet};

use crate::app::{AppLike, AppState, WalletForm, WalletTab};
use crate::stores::WalletData;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms::{self, FIELD_WIDTH};
use crate::ui::widgets::tables::{self, TxColumn};
use crate::ui::widgets::layouts;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let data = state.wallets.snapshot();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Wallet");
        ui.add_space(12.0);

        layouts::render_split_layout(
            ui,
            |ui| render_wallets(ui, &data, &theme),
            |ui| render_action_form(ui, &state.wallet_form, app, &theme),
        );

        ui.add_space(16.0);
        render_history(ui, &data, &theme);
    });
}

fn render_wallets(ui: &mut egui::Ui, data: &WalletData, theme: &Theme) {
    layouts::render_panel(ui, Some("Your Wallets"), |ui| {
        if data.wallets.is_empty() {
            let hint = if data.is_loading() { "Loading..." } else { "No wallets yet" };
            tables::render_empty_state(ui, hint, theme);
            return;
        }

        for wallet in &data.wallets {
            render_wallet_row(ui, wallet, theme);
        }
    });
}

fn render_wallet_row(ui: &mut egui::Ui, wallet: &Wallet, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&wallet.currency).strong());
        ui.colored_label(theme.dim, wallet.kind.as_str());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(format_balance(wallet.balance, &wallet.currency));
        });
    });
    ui.separator();
}

fn render_action_form(ui: &mut egui::Ui, form: &WalletForm, app: &mut impl AppLike, theme: &Theme) {
    layouts::render_panel(ui, None, |ui| {
        if let Some(tab) = forms::render_segmented(ui, WalletTab::all(), form.tab, |t| {
            t.label().to_string()
        }) {
            app.handle_wallet_tab_change(tab);
        }
        ui.add_space(10.0);

        ui.label("Payment Type");
        if let Some(kind) = forms::render_segmented(
            ui,
            &[CurrencyKind::Fiat, CurrencyKind::Crypto],
            form.payment_kind,
            |k| match k {
                CurrencyKind::Fiat => "Fiat".to_string(),
                CurrencyKind::Crypto => "Crypto".to_string(),
            },
        ) {
            app.handle_payment_kind_change(kind);
        }
        ui.add_space(10.0);

        ui.label("Currency");
        let mut picked = None;
        egui::ComboBox::from_id_salt("wallet_currency")
            .selected_text(form.currency.as_str())
            .width(FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for &code in currencies_for(form.payment_kind) {
                    if ui.selectable_label(form.currency == code, code).clicked() {
                        picked = Some(code);
                    }
                }
            });
        if let Some(code) = picked {
            let mut state = app.state().write();
            state.wallet_form.currency = code.to_string();
            state.wallet_form.error = None;
        }
        ui.add_space(10.0);

        let mut amount = form.amount.clone();
        let response = forms::render_text_input(
            ui,
            "Amount",
            &mut amount,
            form.placeholder(),
            false,
            [FIELD_WIDTH, 32.0],
        );
        if response.changed() {
            app.state().write().wallet_form.amount = amount;
        }
        let submit = forms::submitted(ui, &response);
        ui.add_space(12.0);

        if let Some(err) = &form.error {
            forms::render_error(ui, err, theme);
        }

        let label = if form.submitting {
            "Submitting...".to_string()
        } else {
            form.submit_label()
        };
        let clicked = forms::render_primary_button(ui, &label, !form.submitting, theme, FIELD_WIDTH);
        if clicked || (submit && !form.submitting) {
            app.handle_wallet_submit();
        }
        ui.add_space(6.0);
        forms::render_hint(ui, "Requests stay pending until processed", theme);
    });
}

fn render_history(ui: &mut egui::Ui, data: &WalletData, theme: &Theme) {
    layouts::render_panel(ui, Some("Transaction History"), |ui| {
        tables::render_transactions(
            ui,
            "transaction_history",
            &data.transactions,
            &[
                TxColumn::Kind,
                TxColumn::Amount,
                TxColumn::Currency,
                TxColumn::Status,
                TxColumn::DateTime,
            ],
            "No transactions yet",
            theme,
        );
    });
}

//! # Dashboard Screen
//!
//! Balance, referral stats, quick actions and the latest transactions.

use shared::utils::format_usd;
use shared::{Profile, Transaction};
use std::time::Instant;

use crate::app::{AppLike, AppState, Route, WalletTab};
use crate::dashboard::{recent, summarize};
use crate::stores::WalletData;
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{self, TxColumn};
use crate::ui::widgets::layouts;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let theme = Theme::default();
    let wallets = state.wallets.snapshot();
    let profile = state.session.profile();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Dashboard");
        ui.add_space(12.0);

        ui.columns(3, |columns| {
            render_balance_card(&mut columns[0], state, &wallets, &theme);
            render_referral_card(&mut columns[1], profile.as_ref(), &theme);
            render_referral_code_card(&mut columns[2], state, profile.as_ref(), app, &theme);
        });

        ui.add_space(16.0);
        render_quick_actions(ui, app);

        ui.add_space(16.0);
        render_recent_transactions(ui, &wallets.transactions, app, &theme);
    });
}

fn render_balance_card(ui: &mut egui::Ui, state: &AppState, wallets: &WalletData, theme: &Theme) {
    let summary = summarize(&wallets.wallets, &state.dashboard.prices);

    layouts::render_card(ui, "Total Balance", theme, |ui| {
        ui.label(egui::RichText::new(format_usd(summary.total_usd)).size(26.0).strong());
        ui.colored_label(theme.dim, "Across all wallets");
        if !summary.unpriced.is_empty() {
            ui.colored_label(
                theme.warning,
                format!("Not included: {}", summary.unpriced.join(", ")),
            );
        }
    });
}

fn render_referral_card(ui: &mut egui::Ui, profile: Option<&Profile>, theme: &Theme) {
    let (earnings, count) = profile
        .map(|p| (p.referral_earnings, p.referral_count))
        .unwrap_or_default();

    layouts::render_card(ui, "Referral Earnings", theme, |ui| {
        ui.label(egui::RichText::new(format_usd(earnings)).size(26.0).strong());
        ui.colored_label(theme.dim, format!("{} referrals", count));
    });
}

fn render_referral_code_card(
    ui: &mut egui::Ui,
    state: &AppState,
    profile: Option<&Profile>,
    app: &mut impl AppLike,
    theme: &Theme,
) {
    let code = profile.and_then(|p| p.referral_code.clone());

    layouts::render_card(ui, "Your Referral Code", theme, |ui| {
        ui.horizontal(|ui| {
            match &code {
                Some(code) => {
                    ui.label(egui::RichText::new(code).size(22.0).monospace().strong());
                    let copy_label = if state.dashboard.show_copied(Instant::now()) {
                        "Copied!"
                    } else {
                        "Copy"
                    };
                    if ui.button(copy_label).clicked() {
                        ui.ctx().copy_text(code.clone());
                        app.handle_referral_copied();
                    }
                }
                None => {
                    ui.colored_label(theme.dim, "Loading...");
                }
            }
        });
        ui.colored_label(theme.dim, "Earn 7% on referral deposits");
    });
}

fn render_quick_actions(ui: &mut egui::Ui, app: &mut impl AppLike) {
    layouts::render_panel(ui, Some("Quick Actions"), |ui| {
        ui.horizontal(|ui| {
            let size = egui::vec2(140.0, 36.0);
            if ui.add(egui::Button::new("Deposit").min_size(size)).clicked() {
                app.open_wallet_tab(WalletTab::Deposit);
            }
            if ui.add(egui::Button::new("Withdraw").min_size(size)).clicked() {
                app.open_wallet_tab(WalletTab::Withdraw);
            }
            if ui.add(egui::Button::new("Trade").min_size(size)).clicked() {
                app.handle_route_change(Route::Trade);
            }
            if ui.add(egui::Button::new("Verify Account").min_size(size)).clicked() {
                app.handle_route_change(Route::Verification);
            }
        });
    });
}

fn render_recent_transactions(
    ui: &mut egui::Ui,
    transactions: &[Transaction],
    app: &mut impl AppLike,
    theme: &Theme,
) {
    layouts::render_panel(ui, Some("Recent Transactions"), |ui| {
        tables::render_transactions(
            ui,
            "recent_transactions",
            recent(transactions),
            &[TxColumn::Kind, TxColumn::SignedAmount, TxColumn::Status, TxColumn::Date],
            "No recent transactions",
            theme,
        );

        ui.add_space(8.0);
        if ui.link("View All Transactions").clicked() {
            app.handle_route_change(Route::Wallet);
        }
    });
}


//! # Table Components
//!
//! Striped list tables for transaction history and trade requests.
//!
//! [`render_transactions`] picks its cells from [`TxColumn`]s, so the
//! dashboard and wallet screens share one layout of a transaction row.
//! [`render_list`] covers anything else.

use shared::Transaction;

use crate::dashboard::signed_amount;
use crate::ui::theme::Theme;

/// Lists longer than this scroll instead of growing the panel
const SCROLL_AFTER: usize = 8;
const SCROLL_HEIGHT: f32 = 320.0;

/// A cell of a transaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxColumn {
    Kind,
    /// `+25 USD` / `-10 BTC`
    SignedAmount,
    Amount,
    Currency,
    Status,
    Date,
    DateTime,
}

impl TxColumn {
    pub fn header(&self) -> &'static str {
        match self {
            TxColumn::Kind => "Type",
            TxColumn::SignedAmount | TxColumn::Amount => "Amount",
            TxColumn::Currency => "Currency",
            TxColumn::Status => "Status",
            TxColumn::Date | TxColumn::DateTime => "Date",
        }
    }

    fn render(&self, ui: &mut egui::Ui, tx: &Transaction, theme: &Theme) {
        match self {
            TxColumn::Kind => {
                ui.label(tx.kind.label());
            }
            TxColumn::SignedAmount => {
                ui.monospace(signed_amount(tx));
            }
            TxColumn::Amount => {
                ui.monospace(tx.amount.normalize().to_string());
            }
            TxColumn::Currency => {
                ui.label(&tx.currency);
            }
            TxColumn::Status => {
                ui.colored_label(theme.status_color(tx.status), tx.status.label());
            }
            TxColumn::Date => {
                ui.colored_label(theme.dim, tx.created_at.format("%b %d, %Y").to_string());
            }
            TxColumn::DateTime => {
                ui.colored_label(theme.dim, tx.created_at.format("%b %d, %Y %H:%M").to_string());
            }
        }
    }
}

/// Transactions in the given columns, or `empty_text` when there are none
pub fn render_transactions(
    ui: &mut egui::Ui,
    id: &str,
    transactions: &[Transaction],
    columns: &[TxColumn],
    empty_text: &str,
    theme: &Theme,
) {
    let headers: Vec<&str> = columns.iter().map(TxColumn::header).collect();
    render_list(ui, id, &headers, transactions, empty_text, theme, |ui, tx: &Transaction| {
        for column in columns {
            column.render(ui, tx, theme);
        }
    });
}

/// Header row plus one grid row per item. `cells` adds one widget per
/// header; the row is ended here.
pub fn render_list<I, T>(
    ui: &mut egui::Ui,
    id: &str,
    headers: &[&str],
    items: I,
    empty_text: &str,
    theme: &Theme,
    mut cells: impl FnMut(&mut egui::Ui, T),
) where
    I: IntoIterator<Item = T>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    if items.len() == 0 {
        render_empty_state(ui, empty_text, theme);
        return;
    }

    let scroll = items.len() > SCROLL_AFTER;
    let grid = |ui: &mut egui::Ui| {
        egui::Grid::new(id)
            .num_columns(headers.len())
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for header in headers {
                    ui.colored_label(theme.selected, *header);
                }
                ui.end_row();

                for item in items {
                    cells(ui, item);
                    ui.end_row();
                }
            });
    };

    if scroll {
        egui::ScrollArea::vertical()
            .id_salt(id)
            .max_height(SCROLL_HEIGHT)
            .show(ui, grid);
    } else {
        grid(ui);
    }
}

/// Centered placeholder for an empty list
pub fn render_empty_state(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);
        ui.colored_label(theme.dim, text);
        ui.add_space(20.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_follow_columns() {
        let columns = [TxColumn::Kind, TxColumn::SignedAmount, TxColumn::Status, TxColumn::Date];
        let headers: Vec<&str> = columns.iter().map(TxColumn::header).collect();
        assert_eq!(headers, ["Type", "Amount", "Status", "Date"]);
    }
}

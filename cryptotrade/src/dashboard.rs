//! # Dashboard
//!
//! Balance summary, recent activity and the referral code copy state.

use rust_decimal::Decimal;
use shared::{CurrencyKind, Transaction, TransactionKind, Wallet};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How many transactions the dashboard lists
pub const RECENT_TRANSACTIONS: usize = 5;

/// How long "Copied!" stays visible
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Stablecoins valued 1:1 against USD
const USD_PEGGED: &[&str] = &["USD", "USDT"];

/// Total balance across wallets.
///
/// `total_usd` only includes wallets that could be converted: USD-pegged
/// currencies at 1:1 and crypto at the latest fetched price. The rest are
/// listed in `unpriced`. `naive_total` adds every balance as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalanceSummary {
    pub total_usd: Decimal,
    pub unpriced: Vec<String>,
    pub naive_total: Decimal,
}

pub fn summarize(wallets: &[Wallet], prices: &HashMap<String, Decimal>) -> BalanceSummary {
    let mut summary = BalanceSummary::default();

    for wallet in wallets {
        summary.naive_total += wallet.balance;

        let rate = if USD_PEGGED.contains(&wallet.currency.as_str()) {
            Some(Decimal::ONE)
        } else if wallet.kind == CurrencyKind::Crypto {
            prices.get(&wallet.currency).copied()
        } else {
            None
        };

        match rate {
            Some(rate) => summary.total_usd += wallet.balance * rate,
            None if wallet.balance.is_zero() => {}
            None => {
                if !summary.unpriced.contains(&wallet.currency) {
                    summary.unpriced.push(wallet.currency.clone());
                }
            }
        }
    }

    summary
}

/// Crypto currencies among the wallets that need a price for the summary
pub fn assets_to_price(wallets: &[Wallet]) -> Vec<String> {
    let mut assets: Vec<String> = wallets
        .iter()
        .filter(|w| w.kind == CurrencyKind::Crypto && !USD_PEGGED.contains(&w.currency.as_str()))
        .map(|w| w.currency.clone())
        .collect();
    assets.sort();
    assets.dedup();
    assets
}

pub fn recent(transactions: &[Transaction]) -> &[Transaction] {
    &transactions[..transactions.len().min(RECENT_TRANSACTIONS)]
}

/// `+12.5 USD` for deposits, `-12.5 USD` for withdrawals
pub fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.kind {
        TransactionKind::Deposit => '+',
        TransactionKind::Withdrawal => '-',
    };
    format!("{}{} {}", sign, transaction.amount.normalize(), transaction.currency)
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Latest USD prices of the held crypto currencies
    pub prices: HashMap<String, Decimal>,
    copied_at: Option<Instant>,
}

impl DashboardState {
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn show_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::TransactionStatus;
    use uuid::Uuid;

    fn wallet(currency: &str, balance: Decimal) -> Wallet {
        Wallet {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            currency: currency.to_string(),
            balance,
            kind: shared::kind_of(currency),
        }
    }

    fn tx(kind: TransactionKind, amount: Decimal) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            kind,
            amount,
            currency: "USD".to_string(),
            status: TransactionStatus::Pending,
            payment_type: CurrencyKind::Fiat,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_converts_known_currencies() {
        let wallets = vec![
            wallet("USD", Decimal::new(100, 0)),
            wallet("BTC", Decimal::new(1, 2)),
            wallet("USDT", Decimal::new(5, 0)),
            wallet("NGN", Decimal::new(20_000, 0)),
            wallet("ETH", Decimal::new(2, 0)),
        ];
        let prices = HashMap::from([("BTC".to_string(), Decimal::new(50_000, 0))]);

        let summary = summarize(&wallets, &prices);

        assert_eq!(summary.total_usd, Decimal::new(605, 0));
        assert_eq!(summary.unpriced, vec!["NGN".to_string(), "ETH".to_string()]);
        assert_eq!(summary.naive_total, Decimal::new(2010701, 2));
    }

    #[test]
    fn test_empty_wallets_are_not_unpriced() {
        let summary = summarize(&[wallet("GBP", Decimal::ZERO)], &HashMap::new());
        assert!(summary.unpriced.is_empty());
        assert_eq!(summary.total_usd, Decimal::ZERO);
    }

    #[test]
    fn test_assets_to_price() {
        let wallets = vec![
            wallet("ETH", Decimal::ONE),
            wallet("USD", Decimal::ONE),
            wallet("BTC", Decimal::ONE),
            wallet("ETH", Decimal::ONE),
            wallet("USDT", Decimal::ONE),
        ];
        assert_eq!(assets_to_price(&wallets), vec!["BTC".to_string(), "ETH".to_string()]);
    }

    #[test]
    fn test_recent_takes_first_five() {
        let all: Vec<_> = (0..7).map(|i| tx(TransactionKind::Deposit, Decimal::new(i, 0))).collect();
        assert_eq!(recent(&all).len(), 5);
        assert_eq!(recent(&all[..2]).len(), 2);
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(&tx(TransactionKind::Deposit, Decimal::new(2500, 2))), "+25 USD");
        assert_eq!(signed_amount(&tx(TransactionKind::Withdrawal, Decimal::new(75, 1))), "-7.5 USD");
    }

    #[test]
    fn test_copied_feedback_expires() {
        let mut state = DashboardState::default();
        let start = Instant::now();
        assert!(!state.show_copied(start));

        state.mark_copied(start);
        assert!(state.show_copied(start + Duration::from_millis(1999)));
        assert!(!state.show_copied(start + COPIED_FEEDBACK));
    }
}

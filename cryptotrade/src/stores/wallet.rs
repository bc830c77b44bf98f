//! # Wallet Store
//!
//! Cached wallets and transaction history of the signed-in user, plus the
//! deposit and withdrawal requests.
//!
//! Deposits and withdrawals only record a `pending` transaction row. Balances
//! are settled by the backend and show up on the next wallet fetch.
//!
//! ## Stale responses
//!
//! Each collection carries a generation counter. A fetch remembers the
//! generation it started under and drops its result if a newer fetch (or a
//! [`WalletStore::clear`]) happened meanwhile.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::{CurrencyKind, NewTransaction, Transaction, TransactionKind, Wallet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::session::SessionStore;
use crate::core::error::{AppError, Result};
use crate::core::service::DataService;

/// Smallest accepted deposit
pub const MIN_DEPOSIT: Decimal = Decimal::ONE;
/// Smallest accepted withdrawal
pub const MIN_WITHDRAWAL: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[derive(Debug, Clone, Default)]
pub struct WalletData {
    pub wallets: Vec<Wallet>,
    /// Newest first
    pub transactions: Vec<Transaction>,
    pub(crate) pending_requests: u32,
}

impl WalletData {
    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    /// Balance of the first wallet in `currency`, zero when there is none.
    ///
    /// Looks at the currency only, whatever the wallet kind.
    pub fn balance_of(&self, currency: &str) -> Decimal {
        self.wallets
            .iter()
            .find(|w| w.currency == currency)
            .map(|w| w.balance)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn find_wallet(&self, currency: &str, kind: CurrencyKind) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.currency == currency && w.kind == kind)
    }
}

#[derive(Clone)]
pub struct WalletStore {
    data: Arc<dyn DataService>,
    session: SessionStore,
    inner: Arc<RwLock<WalletData>>,
    wallets_generation: Arc<AtomicU64>,
    transactions_generation: Arc<AtomicU64>,
}

impl WalletStore {
    pub fn new(data: Arc<dyn DataService>, session: SessionStore) -> Self {
        Self {
            data,
            session,
            inner: Arc::new(RwLock::new(WalletData::default())),
            wallets_generation: Arc::new(AtomicU64::new(0)),
            transactions_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> WalletData {
        self.inner.read().clone()
    }

    pub fn balance_of(&self, currency: &str) -> Decimal {
        self.inner.read().balance_of(currency)
    }

    /// Replace the wallet list with the backend's rows.
    ///
    /// Failures are logged and returned; the cached list stays as it was.
    pub async fn fetch_wallets(&self) -> Result<()> {
        let generation = self.wallets_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.load_wallets().await;

        match result {
            Ok(wallets) => {
                let mut inner = self.inner.write();
                if self.wallets_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "Discarding stale wallet response");
                    return Ok(());
                }
                tracing::debug!(count = wallets.len(), "Wallets updated");
                inner.wallets = wallets;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Fetch wallets error");
                Err(e)
            }
        }
    }

    /// Replace the history with the backend's rows, newest first.
    ///
    /// Same failure policy as [`WalletStore::fetch_wallets`].
    pub async fn fetch_transactions(&self) -> Result<()> {
        let generation = self.transactions_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.load_transactions().await;

        match result {
            Ok(transactions) => {
                let mut inner = self.inner.write();
                if self.transactions_generation.load(Ordering::SeqCst) != generation {
                    tracing::debug!(generation, "Discarding stale transaction response");
                    return Ok(());
                }
                tracing::debug!(count = transactions.len(), "Transactions updated");
                inner.transactions = transactions;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Fetch transactions error");
                Err(e)
            }
        }
    }

    async fn load_wallets(&self) -> Result<Vec<Wallet>> {
        let identity = self.session.require_identity()?;
        self.data.list_wallets(identity.id).await
    }

    async fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let identity = self.session.require_identity()?;
        self.data.list_transactions(identity.id).await
    }

    /// Request a deposit. Records a pending row; balances are untouched.
    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    pub async fn deposit(&self, amount: Decimal, currency: &str, kind: CurrencyKind) -> Result<Transaction> {
        let result = self.request(TransactionKind::Deposit, amount, currency, kind).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Deposit error");
        }
        result
    }

    /// Request a withdrawal against the cached `(currency, kind)` wallet.
    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    pub async fn withdraw(&self, amount: Decimal, currency: &str, kind: CurrencyKind) -> Result<Transaction> {
        let result = self.request(TransactionKind::Withdrawal, amount, currency, kind).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Withdrawal error");
        }
        result
    }

    async fn request(
        &self,
        action: TransactionKind,
        amount: Decimal,
        currency: &str,
        kind: CurrencyKind,
    ) -> Result<Transaction> {
        let identity = self.session.require_identity()?;

        match action {
            TransactionKind::Deposit => {
                if amount < MIN_DEPOSIT {
                    return Err(AppError::Validation("Minimum deposit amount is $1".to_string()));
                }
            }
            TransactionKind::Withdrawal => {
                if amount < MIN_WITHDRAWAL {
                    return Err(AppError::Validation(
                        "Minimum withdrawal amount is $5".to_string(),
                    ));
                }
                let covered = self
                    .inner
                    .read()
                    .find_wallet(currency, kind)
                    .is_some_and(|w| w.balance >= amount);
                if !covered {
                    return Err(AppError::InsufficientBalance("Insufficient balance".to_string()));
                }
            }
        }

        self.inner.write().pending_requests += 1;
        let result = self
            .data
            .insert_transaction(NewTransaction::pending(identity.id, action, amount, currency, kind))
            .await;

        let mut inner = self.inner.write();
        inner.pending_requests = inner.pending_requests.saturating_sub(1);
        let row = result?;
        inner.transactions.insert(0, row.clone());
        tracing::info!(
            transaction_id = %row.id,
            kind = ?row.kind,
            currency = %row.currency,
            "Transaction request recorded"
        );
        Ok(row)
    }

    /// Drop all cached rows and invalidate in-flight fetches
    pub fn clear(&self) {
        self.wallets_generation.fetch_add(1, Ordering::SeqCst);
        self.transactions_generation.fetch_add(1, Ordering::SeqCst);
        *self.inner.write() = WalletData::default();
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fiat or crypto. Also used as the transaction `payment_type`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    #[default]
    Fiat,
    Crypto,
}

impl CurrencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyKind::Fiat => "fiat",
            CurrencyKind::Crypto => "crypto",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// A balance in one currency for one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub currency: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(rename = "type")]
    pub kind: CurrencyKind,
}

/// A deposit or withdrawal request as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: String,
    pub status: TransactionStatus,
    pub payment_type: CurrencyKind,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the transactions table.
///
/// `id` and `created_at` are assigned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTransaction {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub currency: String,
    pub status: TransactionStatus,
    pub payment_type: CurrencyKind,
}

impl NewTransaction {
    /// Pending request, the only status the client ever creates
    pub fn pending(
        user_id: Uuid,
        kind: TransactionKind,
        amount: Decimal,
        currency: impl Into<String>,
        payment_type: CurrencyKind,
    ) -> Self {
        Self {
            user_id,
            kind,
            amount,
            currency: currency.into(),
            status: TransactionStatus::Pending,
            payment_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_wire_names() {
        let tx = NewTransaction::pending(
            Uuid::nil(),
            TransactionKind::Withdrawal,
            Decimal::new(5, 0),
            "BTC",
            CurrencyKind::Crypto,
        );
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "withdrawal");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["payment_type"], "crypto");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_transaction_row_from_backend() {
        let json = r#"{
            "id": "0b9f2d4e-1c3a-4e5f-8a7b-6c5d4e3f2a1b",
            "user_id": "7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d",
            "type": "deposit",
            "amount": 250,
            "currency": "USD",
            "status": "completed",
            "payment_type": "fiat",
            "created_at": "2024-05-01T12:00:00+00:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Deposit);
        assert_eq!(tx.amount, Decimal::new(250, 0));
        assert_eq!(tx.status, TransactionStatus::Completed);
    }

    #[test]
    fn test_wallet_balance_from_string() {
        let json = r#"{
            "id": "0b9f2d4e-1c3a-4e5f-8a7b-6c5d4e3f2a1b",
            "user_id": "7d6f0c1e-4b8a-4a55-9d0b-0f1e2a3b4c5d",
            "currency": "BTC",
            "balance": "0.00250000",
            "type": "crypto"
        }"#;
        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.kind, CurrencyKind::Crypto);
        assert_eq!(wallet.balance, Decimal::new(25, 4));
    }
}

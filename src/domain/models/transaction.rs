//! Domain model for a ledger transaction.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of ledger entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Expense,
    Allowance,
}

impl TransactionType {
    /// Whether entries of this type add to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::Allowance)
    }
}

/// A single immutable ledger entry. No update or delete surface exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub child_id: String,
    /// Always positive; `transaction_type` carries the sign.
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build the id for the `n`-th transaction appended to a store.
    pub fn generate_id(sequence: u64) -> String {
        format!("txn::{}", sequence)
    }

    /// Amount signed by type: credits positive, expenses negative.
    pub fn signed_amount(&self) -> Decimal {
        if self.transaction_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

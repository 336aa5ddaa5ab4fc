//! Domain model for a child account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a child's virtual wallet.
///
/// The stored `balance` always equals the signed sum of the child's ledger
/// entries; only the money service mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    /// Build the id for the `n`-th child created in a store.
    pub fn generate_id(sequence: u64) -> String {
        format!("child::{}", sequence)
    }
}

//! Append-only transaction ledger for the allowance tracker.

use chrono::Utc;
use log::info;
use rust_decimal::Decimal;

use crate::domain::commands::transactions::{TransactionListQuery, TransactionListResult};
use crate::domain::errors::DomainResult;
use crate::domain::models::transaction::{Transaction, TransactionType};
use crate::storage::memory::{MemoryConnection, TransactionRepository};
use crate::storage::traits::TransactionStorage;

/// Service owning the immutable transaction log.
///
/// Appends come only from the money service, which has already validated
/// the amount; reads are open to everyone.
#[derive(Clone)]
pub struct LedgerService {
    transaction_repository: TransactionRepository,
}

impl LedgerService {
    /// Create a new LedgerService
    pub fn new(connection: MemoryConnection) -> Self {
        let transaction_repository = TransactionRepository::new(connection);
        Self {
            transaction_repository,
        }
    }

    /// Append an entry to a child's log and return it.
    pub(crate) fn append(
        &self,
        child_id: &str,
        amount: Decimal,
        transaction_type: TransactionType,
        description: String,
    ) -> DomainResult<Transaction> {
        let transaction = Transaction {
            id: self.transaction_repository.reserve_transaction_id()?,
            child_id: child_id.to_string(),
            amount,
            transaction_type,
            description,
            created_at: Utc::now(),
        };

        self.transaction_repository.store_transaction(&transaction)?;

        info!(
            "Appended {:?} transaction {} for child {}",
            transaction.transaction_type, transaction.id, child_id
        );

        Ok(transaction)
    }

    /// List a child's transactions, most recently created first
    pub fn list_transactions(
        &self,
        query: TransactionListQuery,
    ) -> DomainResult<TransactionListResult> {
        let transactions = self.transaction_repository.list_transactions(&query.child_id)?;
        Ok(TransactionListResult { transactions })
    }

    /// Signed sum of every entry for a child: deposits and allowances
    /// count positive, expenses negative. Matches the stored balance at
    /// every observable point.
    pub fn signed_total(&self, child_id: &str) -> DomainResult<Decimal> {
        let transactions = self.transaction_repository.list_transactions(child_id)?;
        Ok(transactions.iter().map(Transaction::signed_amount).sum())
    }
}

//! In-memory transaction repository.

use anyhow::Result;

use crate::domain::models::transaction::Transaction;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::TransactionStorage;

/// Append-only transaction log over the shared in-memory tables.
#[derive(Clone)]
pub struct TransactionRepository {
    connection: MemoryConnection,
}

impl TransactionRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl TransactionStorage for TransactionRepository {
    fn reserve_transaction_id(&self) -> Result<String> {
        Ok(self.connection.with_tables(|tables| {
            tables.transaction_sequence += 1;
            Transaction::generate_id(tables.transaction_sequence)
        }))
    }

    fn store_transaction(&self, transaction: &Transaction) -> Result<()> {
        self.connection.with_tables(|tables| {
            tables
                .transactions
                .entry(transaction.child_id.clone())
                .or_default()
                .push(transaction.clone());
        });
        Ok(())
    }

    fn list_transactions(&self, child_id: &str) -> Result<Vec<Transaction>> {
        // The log holds creation order; reversing it gives a stable
        // newest-first view without looking at id magnitude.
        Ok(self.connection.with_tables(|tables| {
            tables
                .transactions
                .get(child_id)
                .map(|log| log.iter().rev().cloned().collect())
                .unwrap_or_default()
        }))
    }
}

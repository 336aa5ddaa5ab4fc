//! In-memory storage connection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::models::allowance::WeeklyAllowance;
use crate::domain::models::child::Child;
use crate::domain::models::transaction::Transaction;

/// Backing tables shared by every repository on one connection.
///
/// `children` keeps insertion order; each transaction log keeps creation
/// order; allowances are a single slot per child id.
#[derive(Default)]
pub(crate) struct Tables {
    pub children: Vec<Child>,
    pub transactions: HashMap<String, Vec<Transaction>>,
    pub allowances: HashMap<String, WeeklyAllowance>,
    pub child_sequence: u64,
    pub transaction_sequence: u64,
}

/// `MemoryConnection` owns the in-memory tables and is cloned into each
/// repository, the same way a file- or database-backed connection would be
/// shared. Constructed empty; torn down with the process.
#[derive(Clone, Default)]
pub struct MemoryConnection {
    tables: Arc<Mutex<Tables>>,
    child_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl MemoryConnection {
    /// Create a connection with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the tables while holding the table lock.
    pub(crate) fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(&mut tables)
    }

    /// Hand out the write lock serializing compound mutations against a
    /// single child. The caller holds it across a ledger append and the
    /// matching balance update so the pair stays indivisible; different
    /// children proceed independently.
    pub(crate) fn child_write_lock(&self, child_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.child_locks.lock().unwrap();
        locks
            .entry(child_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::allowance::WeeklyAllowance;
use crate::domain::models::child::Child;
use crate::domain::models::transaction::Transaction;

/// Trait defining the interface for child storage operations
pub trait ChildStorage: Send + Sync {
    /// Reserve a fresh child id. Ids are unique within the store and never
    /// reused.
    fn reserve_child_id(&self) -> Result<String>;

    /// Store a new child
    fn store_child(&self, child: &Child) -> Result<()>;

    /// Retrieve a specific child by ID
    fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List the children owned by a user, in creation order
    fn list_children_for_user(&self, user_id: &str) -> Result<Vec<Child>>;

    /// Update an existing child
    fn update_child(&self, child: &Child) -> Result<()>;
}

/// Trait defining the interface for transaction storage operations
///
/// The log is append-only: entries are immutable once stored and the trait
/// deliberately offers no update or delete.
pub trait TransactionStorage: Send + Sync {
    /// Reserve a fresh transaction id. Ids are unique within the store and
    /// never reused.
    fn reserve_transaction_id(&self) -> Result<String>;

    /// Append a transaction to a child's log
    fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// List a child's transactions ordered most recently created first.
    /// Ordering follows creation order, not id magnitude.
    fn list_transactions(&self, child_id: &str) -> Result<Vec<Transaction>>;
}

/// Trait defining the interface for weekly allowance storage
///
/// One slot per child: storing a config replaces any existing one for
/// that child.
pub trait AllowanceStorage: Send + Sync {
    /// Store or replace the allowance config for a child
    fn store_allowance(&self, allowance: &WeeklyAllowance) -> Result<()>;

    /// Retrieve the allowance config for a specific child
    fn get_allowance(&self, child_id: &str) -> Result<Option<WeeklyAllowance>>;

    /// Update an existing allowance config
    fn update_allowance(&self, allowance: &WeeklyAllowance) -> Result<()>;

    /// List every stored allowance config
    fn list_allowances(&self) -> Result<Vec<WeeklyAllowance>>;
}

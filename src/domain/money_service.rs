//! Balance mutation for the allowance tracker.
//!
//! Deposits and expenses share one validation/commit protocol: validate
//! the amount, resolve the child, then append a ledger entry and adjust
//! the stored balance as one unit under the child's write lock.

use log::info;
use rust_decimal::Decimal;

use crate::domain::child_service::ChildService;
use crate::domain::commands::money::{DepositCommand, RecordExpenseCommand};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ledger_service::LedgerService;
use crate::domain::models::transaction::{Transaction, TransactionType};
use crate::storage::memory::MemoryConnection;

/// Validate a mutation amount. Zero and negative are distinct failures,
/// and the check runs before any child lookup.
pub(crate) fn validate_amount(amount: Decimal) -> DomainResult<()> {
    if amount == Decimal::ZERO {
        return Err(DomainError::ZeroAmount);
    }
    if amount < Decimal::ZERO {
        return Err(DomainError::NegativeAmount);
    }
    Ok(())
}

/// Service applying deposits and expenses against child balances.
#[derive(Clone)]
pub struct MoneyService {
    connection: MemoryConnection,
    child_service: ChildService,
    ledger_service: LedgerService,
}

impl MoneyService {
    pub fn new(
        connection: MemoryConnection,
        child_service: ChildService,
        ledger_service: LedgerService,
    ) -> Self {
        Self {
            connection,
            child_service,
            ledger_service,
        }
    }

    /// Credit money to a child's balance
    pub fn deposit(&self, command: DepositCommand) -> DomainResult<Transaction> {
        validate_amount(command.amount)?;
        self.credit(
            &command.child_id,
            command.amount,
            TransactionType::Deposit,
            command.description,
        )
    }

    /// Spend from a child's balance. An expense equal to the full balance
    /// is allowed and drives it to exactly zero.
    pub fn record_expense(&self, command: RecordExpenseCommand) -> DomainResult<Transaction> {
        validate_amount(command.amount)?;

        let lock = self.connection.child_write_lock(&command.child_id);
        let _guard = lock.lock().unwrap();

        let child = self.child_service.require_child(&command.child_id)?;
        if command.amount > child.balance {
            return Err(DomainError::InsufficientBalance {
                requested: command.amount,
                available: child.balance,
            });
        }

        let transaction = self.ledger_service.append(
            &command.child_id,
            command.amount,
            TransactionType::Expense,
            command.description,
        )?;
        let child = self
            .child_service
            .apply_balance_delta(&command.child_id, -command.amount)?;

        info!(
            "Recorded expense {} for child {}: balance now {}",
            transaction.id, child.id, child.balance
        );

        Ok(transaction)
    }

    /// Shared credit path for deposits and scheduler-issued allowances.
    /// The caller has already validated the amount.
    pub(crate) fn credit(
        &self,
        child_id: &str,
        amount: Decimal,
        transaction_type: TransactionType,
        description: String,
    ) -> DomainResult<Transaction> {
        let lock = self.connection.child_write_lock(child_id);
        let _guard = lock.lock().unwrap();

        self.child_service.require_child(child_id)?;

        let transaction =
            self.ledger_service
                .append(child_id, amount, transaction_type, description)?;
        let child = self.child_service.apply_balance_delta(child_id, amount)?;

        info!(
            "Credited {} to child {}: balance now {}",
            amount, child.id, child.balance
        );

        Ok(transaction)
    }
}

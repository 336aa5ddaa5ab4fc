//! Ledger and balance-mutation core for a household allowance tracker.
//!
//! Parents create child accounts, deposit or spend against per-child
//! balances, and configure a recurring weekly allowance. The crate keeps
//! every stored balance equal to the signed sum of an append-only
//! transaction log, and the allowance scheduler turns calendar state into
//! ledger entries at most once per due date.
//!
//! Persistence and presentation live outside: the services run over an
//! in-memory backend here, and any other backend can slot in behind the
//! traits in [`storage::traits`].

pub mod domain;
pub mod storage;

pub use domain::commands;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::allowance::WeeklyAllowance;
pub use domain::models::child::Child;
pub use domain::models::transaction::{Transaction, TransactionType};
pub use domain::{AllowanceService, ChildService, LedgerService, MoneyService};
pub use storage::memory::MemoryConnection;

/// Main backend struct that orchestrates all services over one store.
#[derive(Clone)]
pub struct Backend {
    pub child_service: ChildService,
    pub ledger_service: LedgerService,
    pub money_service: MoneyService,
    pub allowance_service: AllowanceService,
}

impl Backend {
    /// Create a backend instance with all services wired over a fresh
    /// in-memory store.
    pub fn new() -> Self {
        let connection = MemoryConnection::new();

        let child_service = ChildService::new(connection.clone());
        let ledger_service = LedgerService::new(connection.clone());
        let money_service = MoneyService::new(
            connection.clone(),
            child_service.clone(),
            ledger_service.clone(),
        );
        let allowance_service = AllowanceService::new(
            connection,
            child_service.clone(),
            money_service.clone(),
        );

        Backend {
            child_service,
            ledger_service,
            money_service,
            allowance_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

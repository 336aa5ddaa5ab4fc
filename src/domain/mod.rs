//! # Domain Module
//!
//! Contains all business logic for the allowance ledger core.
//!
//! This module encapsulates the entities and services that keep each
//! child's stored balance consistent with an append-only transaction log.
//! It operates independently of any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **child_service**: Child account registry and the balance-delta path
//! - **ledger_service**: Append-only transaction log and history queries
//! - **money_service**: Deposit/expense validation and atomic commit
//! - **allowance_service**: Weekly allowance configuration and the daily
//!   processing tick
//!
//! ## Business Rules
//!
//! - A balance always equals the signed sum of the child's transactions
//! - Amount validity is checked before child existence, which is checked
//!   before balance sufficiency
//! - Transactions are immutable once appended
//! - One allowance per child; setting a new one replaces the old

pub mod allowance_service;
pub mod child_service;
pub mod commands;
pub mod errors;
pub mod ledger_service;
pub mod models;
pub mod money_service;

pub use allowance_service::AllowanceService;
pub use child_service::ChildService;
pub use ledger_service::LedgerService;
pub use money_service::MoneyService;

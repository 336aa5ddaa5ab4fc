//! In-memory storage backend.
//!
//! The repositories here implement the traits in [`crate::storage::traits`]
//! over one shared [`MemoryConnection`]. A persistent backend would slot in
//! behind the same traits.

pub mod allowance_repository;
pub mod child_repository;
pub mod connection;
pub mod transaction_repository;

pub use allowance_repository::AllowanceRepository;
pub use child_repository::ChildRepository;
pub use connection::MemoryConnection;
pub use transaction_repository::TransactionRepository;

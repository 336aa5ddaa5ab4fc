//! In-memory allowance repository.

use anyhow::Result;

use crate::domain::models::allowance::WeeklyAllowance;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::AllowanceStorage;

/// Single-slot-per-child allowance store over the shared in-memory tables.
#[derive(Clone)]
pub struct AllowanceRepository {
    connection: MemoryConnection,
}

impl AllowanceRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl AllowanceStorage for AllowanceRepository {
    fn store_allowance(&self, allowance: &WeeklyAllowance) -> Result<()> {
        self.connection.with_tables(|tables| {
            tables
                .allowances
                .insert(allowance.child_id.clone(), allowance.clone());
        });
        Ok(())
    }

    fn get_allowance(&self, child_id: &str) -> Result<Option<WeeklyAllowance>> {
        Ok(self
            .connection
            .with_tables(|tables| tables.allowances.get(child_id).cloned()))
    }

    fn update_allowance(&self, allowance: &WeeklyAllowance) -> Result<()> {
        self.connection.with_tables(|tables| {
            match tables.allowances.get_mut(&allowance.child_id) {
                Some(stored) => {
                    *stored = allowance.clone();
                    Ok(())
                }
                None => Err(anyhow::anyhow!(
                    "no stored allowance for child {}",
                    allowance.child_id
                )),
            }
        })
    }

    fn list_allowances(&self) -> Result<Vec<WeeklyAllowance>> {
        Ok(self
            .connection
            .with_tables(|tables| tables.allowances.values().cloned().collect()))
    }
}

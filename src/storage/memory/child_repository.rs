//! In-memory child repository.

use anyhow::Result;

use crate::domain::models::child::Child;
use crate::storage::memory::connection::MemoryConnection;
use crate::storage::traits::ChildStorage;

/// Child repository over the shared in-memory tables.
#[derive(Clone)]
pub struct ChildRepository {
    connection: MemoryConnection,
}

impl ChildRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ChildStorage for ChildRepository {
    fn reserve_child_id(&self) -> Result<String> {
        Ok(self.connection.with_tables(|tables| {
            tables.child_sequence += 1;
            Child::generate_id(tables.child_sequence)
        }))
    }

    fn store_child(&self, child: &Child) -> Result<()> {
        self.connection.with_tables(|tables| {
            tables.children.push(child.clone());
        });
        Ok(())
    }

    fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        Ok(self
            .connection
            .with_tables(|tables| tables.children.iter().find(|c| c.id == child_id).cloned()))
    }

    fn list_children_for_user(&self, user_id: &str) -> Result<Vec<Child>> {
        Ok(self.connection.with_tables(|tables| {
            tables
                .children
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect()
        }))
    }

    fn update_child(&self, child: &Child) -> Result<()> {
        self.connection.with_tables(|tables| {
            match tables.children.iter_mut().find(|c| c.id == child.id) {
                Some(stored) => {
                    *stored = child.clone();
                    Ok(())
                }
                None => Err(anyhow::anyhow!("no stored child with id {}", child.id)),
            }
        })
    }
}

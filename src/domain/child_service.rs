use chrono::Utc;
use log::{info, warn};
use rust_decimal::Decimal;

use crate::domain::commands::child::{
    CreateChildCommand, CreateChildResult, GetChildCommand, GetChildResult, ListChildrenCommand,
    ListChildrenResult,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::child::Child;
use crate::storage::memory::{ChildRepository, MemoryConnection};
use crate::storage::traits::ChildStorage;

/// Service for managing child accounts (the registry).
#[derive(Clone)]
pub struct ChildService {
    child_repository: ChildRepository,
}

impl ChildService {
    /// Create a new ChildService
    pub fn new(connection: MemoryConnection) -> Self {
        let child_repository = ChildRepository::new(connection);
        Self { child_repository }
    }

    /// Create a new child account with a zero balance
    pub fn create_child(&self, command: CreateChildCommand) -> DomainResult<CreateChildResult> {
        info!(
            "Creating child: name={}, user={}",
            command.name, command.user_id
        );

        if command.name.is_empty() {
            return Err(DomainError::EmptyChildName);
        }

        let now = Utc::now();
        let child = Child {
            id: self.child_repository.reserve_child_id()?,
            user_id: command.user_id,
            name: command.name,
            balance: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };

        self.child_repository.store_child(&child)?;

        info!("Created child: {} with ID: {}", child.name, child.id);

        Ok(CreateChildResult { child })
    }

    /// Get a child by ID. Absence is a `None`, not an error.
    pub fn get_child(&self, command: GetChildCommand) -> DomainResult<GetChildResult> {
        let child = self.child_repository.get_child(&command.child_id)?;

        if child.is_none() {
            warn!("Child not found: {}", command.child_id);
        }

        Ok(GetChildResult { child })
    }

    /// List the children owned by a user, in creation order
    pub fn list_children(&self, command: ListChildrenCommand) -> DomainResult<ListChildrenResult> {
        let children = self
            .child_repository
            .list_children_for_user(&command.user_id)?;

        info!(
            "Found {} children for user {}",
            children.len(),
            command.user_id
        );

        Ok(ListChildrenResult { children })
    }

    /// Resolve a child that must exist for a mutating operation.
    pub(crate) fn require_child(&self, child_id: &str) -> DomainResult<Child> {
        self.child_repository
            .get_child(child_id)?
            .ok_or_else(|| DomainError::ChildNotFound(child_id.to_string()))
    }

    /// Adjust a child's stored balance by a signed delta.
    ///
    /// This is the only mutation path for balances; the money service
    /// drives it together with the matching ledger append.
    pub(crate) fn apply_balance_delta(
        &self,
        child_id: &str,
        delta: Decimal,
    ) -> DomainResult<Child> {
        let mut child = self.require_child(child_id)?;
        child.balance += delta;
        child.updated_at = Utc::now();
        self.child_repository.update_child(&child)?;
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn setup_test() -> ChildService {
        ChildService::new(MemoryConnection::new())
    }

    #[test]
    fn test_create_child() {
        let service = setup_test();
        let command = CreateChildCommand {
            user_id: "1".to_string(),
            name: "Tom".to_string(),
        };

        let result = service.create_child(command).unwrap();
        assert!(!result.child.id.is_empty());
        assert_eq!(result.child.name, "Tom");
        assert_eq!(result.child.user_id, "1");
        assert_eq!(result.child.balance, Decimal::ZERO);
    }

    #[test]
    fn test_create_child_with_empty_name() {
        let service = setup_test();
        let command = CreateChildCommand {
            user_id: "1".to_string(),
            name: String::new(),
        };

        let err = service.create_child(command).unwrap_err();
        assert_eq!(err, DomainError::EmptyChildName);
        assert_eq!(err.to_string(), "Child name cannot be empty");

        // Nothing was stored.
        let listed = service
            .list_children(ListChildrenCommand {
                user_id: "1".to_string(),
            })
            .unwrap();
        assert!(listed.children.is_empty());
    }

    #[test]
    fn test_get_child() {
        let service = setup_test();
        let created = service
            .create_child(CreateChildCommand {
                user_id: "1".to_string(),
                name: "Tom".to_string(),
            })
            .unwrap();

        let result = service
            .get_child(GetChildCommand {
                child_id: created.child.id.clone(),
            })
            .unwrap();

        assert_eq!(result.child, Some(created.child));
    }

    #[test]
    fn test_get_nonexistent_child() {
        let service = setup_test();
        let result = service
            .get_child(GetChildCommand {
                child_id: "child::999".to_string(),
            })
            .unwrap();
        assert!(result.child.is_none());
    }

    #[test]
    fn test_lookups_are_pure_reads() {
        let service = setup_test();
        let created = service
            .create_child(CreateChildCommand {
                user_id: "1".to_string(),
                name: "Tom".to_string(),
            })
            .unwrap();

        let command = GetChildCommand {
            child_id: created.child.id.clone(),
        };
        let first = service.get_child(command.clone()).unwrap();
        let second = service.get_child(command).unwrap();
        assert_eq!(first.child, second.child);
    }

    #[test]
    fn test_list_children_for_user_in_creation_order() {
        let service = setup_test();
        let alice = service
            .create_child(CreateChildCommand {
                user_id: "1".to_string(),
                name: "Alice".to_string(),
            })
            .unwrap();
        service
            .create_child(CreateChildCommand {
                user_id: "2".to_string(),
                name: "Bob".to_string(),
            })
            .unwrap();
        let carol = service
            .create_child(CreateChildCommand {
                user_id: "1".to_string(),
                name: "Carol".to_string(),
            })
            .unwrap();

        let listed = service
            .list_children(ListChildrenCommand {
                user_id: "1".to_string(),
            })
            .unwrap();

        let names: Vec<&str> = listed.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert_eq!(listed.children[0].id, alice.child.id);
        assert_eq!(listed.children[1].id, carol.child.id);
    }

    #[test]
    fn test_list_children_for_unknown_user_is_empty() {
        let service = setup_test();
        let listed = service
            .list_children(ListChildrenCommand {
                user_id: "nobody".to_string(),
            })
            .unwrap();
        assert!(listed.children.is_empty());
    }

    #[test]
    fn test_apply_balance_delta() {
        let service = setup_test();
        let created = service
            .create_child(CreateChildCommand {
                user_id: "1".to_string(),
                name: "Tom".to_string(),
            })
            .unwrap();

        let child = service
            .apply_balance_delta(&created.child.id, dec!(12.34))
            .unwrap();
        assert_eq!(child.balance, dec!(12.34));

        let child = service
            .apply_balance_delta(&created.child.id, dec!(-2.34))
            .unwrap();
        assert_eq!(child.balance, dec!(10.00));
    }

    #[test]
    fn test_apply_balance_delta_unknown_child() {
        let service = setup_test();
        let err = service
            .apply_balance_delta("child::404", dec!(1.00))
            .unwrap_err();
        assert_eq!(err, DomainError::ChildNotFound("child::404".to_string()));
        assert_eq!(err.to_string(), "Child with ID child::404 not found");
    }
}

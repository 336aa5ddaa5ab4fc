//! Domain-level command and query types.
//!
//! These structs are used by the services inside the domain layer; a
//! presentation layer is responsible for mapping its own DTOs onto them.

pub mod child {
    use crate::domain::models::child::Child;

    /// Input for creating a new child account.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub user_id: String,
        pub name: String,
    }

    /// Result of creating a child.
    #[derive(Debug, Clone)]
    pub struct CreateChildResult {
        pub child: Child,
    }

    /// Input for looking up a child by id.
    #[derive(Debug, Clone)]
    pub struct GetChildCommand {
        pub child_id: String,
    }

    /// Result of looking up a child. Absence is not an error.
    #[derive(Debug, Clone)]
    pub struct GetChildResult {
        pub child: Option<Child>,
    }

    /// Input for listing the children owned by a user.
    #[derive(Debug, Clone)]
    pub struct ListChildrenCommand {
        pub user_id: String,
    }

    /// Result of listing children, in creation order.
    #[derive(Debug, Clone)]
    pub struct ListChildrenResult {
        pub children: Vec<Child>,
    }
}

pub mod money {
    use rust_decimal::Decimal;

    /// Input for crediting money to a child's balance.
    #[derive(Debug, Clone)]
    pub struct DepositCommand {
        pub child_id: String,
        pub amount: Decimal,
        pub description: String,
    }

    /// Input for spending from a child's balance.
    #[derive(Debug, Clone)]
    pub struct RecordExpenseCommand {
        pub child_id: String,
        pub amount: Decimal,
        pub description: String,
    }
}

pub mod transactions {
    use crate::domain::models::transaction::Transaction;

    /// Query parameters for listing a child's transactions.
    #[derive(Debug, Clone)]
    pub struct TransactionListQuery {
        pub child_id: String,
    }

    /// Result of listing transactions, most recently created first.
    #[derive(Debug, Clone)]
    pub struct TransactionListResult {
        pub transactions: Vec<Transaction>,
    }
}

pub mod allowance {
    use crate::domain::models::allowance::WeeklyAllowance;
    use rust_decimal::Decimal;

    /// Input for creating or replacing a child's weekly allowance.
    #[derive(Debug, Clone)]
    pub struct SetAllowanceCommand {
        pub child_id: String,
        pub amount: Decimal,
        pub day_of_week: u8,
    }

    /// Result of setting an allowance.
    #[derive(Debug, Clone)]
    pub struct SetAllowanceResult {
        pub allowance: WeeklyAllowance,
    }

    /// Input for reading a child's allowance configuration.
    #[derive(Debug, Clone)]
    pub struct GetAllowanceCommand {
        pub child_id: String,
    }

    /// Result of reading an allowance configuration.
    #[derive(Debug, Clone)]
    pub struct GetAllowanceResult {
        pub allowance: Option<WeeklyAllowance>,
    }
}

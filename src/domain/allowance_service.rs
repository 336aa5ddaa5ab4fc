use chrono::{Datelike, Local, NaiveDate, Utc};
use log::{error, info};

use crate::domain::child_service::ChildService;
use crate::domain::commands::allowance::{
    GetAllowanceCommand, GetAllowanceResult, SetAllowanceCommand, SetAllowanceResult,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::allowance::WeeklyAllowance;
use crate::domain::models::transaction::{Transaction, TransactionType};
use crate::domain::money_service::{validate_amount, MoneyService};
use crate::storage::memory::{AllowanceRepository, MemoryConnection};
use crate::storage::traits::AllowanceStorage;

/// Description written on every scheduler-issued credit.
const ALLOWANCE_DESCRIPTION: &str = "Weekly allowance";

/// Service managing weekly allowance configurations and the daily
/// processing tick. The tick is driven once per calendar day by an
/// external scheduler; the core keeps no timer of its own.
#[derive(Clone)]
pub struct AllowanceService {
    allowance_repository: AllowanceRepository,
    child_service: ChildService,
    money_service: MoneyService,
}

impl AllowanceService {
    /// Create a new AllowanceService
    pub fn new(
        connection: MemoryConnection,
        child_service: ChildService,
        money_service: MoneyService,
    ) -> Self {
        let allowance_repository = AllowanceRepository::new(connection);
        Self {
            allowance_repository,
            child_service,
            money_service,
        }
    }

    /// Create or replace a child's weekly allowance.
    ///
    /// Replacing keeps the record's id, creation time and
    /// `last_paid_on`, so re-configuring an allowance that already paid
    /// out this week does not pay it twice.
    pub fn set_allowance(&self, command: SetAllowanceCommand) -> DomainResult<SetAllowanceResult> {
        info!(
            "Setting allowance for child {}: {} on day {}",
            command.child_id, command.amount, command.day_of_week
        );

        validate_amount(command.amount)?;

        if !WeeklyAllowance::is_valid_day_of_week(command.day_of_week) {
            return Err(DomainError::InvalidDayOfWeek(command.day_of_week));
        }

        self.child_service.require_child(&command.child_id)?;

        let now = Utc::now();
        let allowance = match self.allowance_repository.get_allowance(&command.child_id)? {
            Some(mut existing) => {
                existing.amount = command.amount;
                existing.day_of_week = command.day_of_week;
                existing.is_active = true;
                existing.updated_at = now;
                existing
            }
            None => WeeklyAllowance {
                id: WeeklyAllowance::generate_id(&command.child_id, now.timestamp_millis() as u64),
                child_id: command.child_id.clone(),
                amount: command.amount,
                day_of_week: command.day_of_week,
                is_active: true,
                last_paid_on: None,
                created_at: now,
                updated_at: now,
            },
        };

        self.allowance_repository.store_allowance(&allowance)?;

        info!(
            "Allowance for child {} is now {} every {}",
            allowance.child_id,
            allowance.amount,
            allowance.day_name()
        );

        Ok(SetAllowanceResult { allowance })
    }

    /// Read a child's allowance configuration
    pub fn get_allowance(&self, command: GetAllowanceCommand) -> DomainResult<GetAllowanceResult> {
        let allowance = self.allowance_repository.get_allowance(&command.child_id)?;
        Ok(GetAllowanceResult { allowance })
    }

    /// Process every allowance due today and return the issued
    /// transactions, one credit per due allowance at most.
    pub fn process_allowances(&self) -> DomainResult<Vec<Transaction>> {
        self.process_allowances_on(Local::now().date_naive())
    }

    /// Process allowances as if `today` were the current date.
    pub fn process_allowances_on(&self, today: NaiveDate) -> DomainResult<Vec<Transaction>> {
        info!("Processing allowances for {}", today);

        let mut issued = Vec::new();
        for mut allowance in self.allowance_repository.list_allowances()? {
            if !allowance.is_active || !Self::is_allowance_day(today, allowance.day_of_week) {
                continue;
            }
            if allowance.last_paid_on == Some(today) {
                info!(
                    "Allowance for child {} already paid on {}",
                    allowance.child_id, today
                );
                continue;
            }

            match self.money_service.credit(
                &allowance.child_id,
                allowance.amount,
                TransactionType::Allowance,
                ALLOWANCE_DESCRIPTION.to_string(),
            ) {
                Ok(transaction) => {
                    allowance.last_paid_on = Some(today);
                    allowance.updated_at = Utc::now();
                    self.allowance_repository.update_allowance(&allowance)?;

                    info!(
                        "Issued allowance {} for child {}",
                        transaction.id, allowance.child_id
                    );
                    issued.push(transaction);
                }
                Err(e) => {
                    // Skip this child and keep processing the rest.
                    error!(
                        "Failed to issue allowance for child {}: {}",
                        allowance.child_id, e
                    );
                }
            }
        }

        info!("Issued {} allowance payments", issued.len());
        Ok(issued)
    }

    /// Whether `date` falls on the given ISO day of week (1=Monday).
    pub fn is_allowance_day(date: NaiveDate, day_of_week: u8) -> bool {
        date.weekday().number_from_monday() as u8 == day_of_week
    }
}

//! Domain model for a weekly allowance configuration.
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recurring weekly credit configuration, keyed one-per-child. Setting a
/// new one replaces the previous record for that child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAllowance {
    pub id: String,
    pub child_id: String,
    pub amount: Decimal,
    pub day_of_week: u8, // 1 = Monday, ..., 7 = Sunday (ISO 8601)
    pub is_active: bool,
    /// Date of the most recent payment processed for this allowance.
    pub last_paid_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WeeklyAllowance {
    /// Generate an allowance id based on child id and timestamp
    pub fn generate_id(child_id: &str, epoch_millis: u64) -> String {
        format!("allowance::{}::{}", child_id, epoch_millis)
    }

    /// Get the day name for the configured day of week
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            7 => "Sunday",
            _ => "Invalid",
        }
    }

    /// Validate day of week value
    pub fn is_valid_day_of_week(day: u8) -> bool {
        (1..=7).contains(&day)
    }
}

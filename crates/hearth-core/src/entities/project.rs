use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectStatus;

/// A renovation effort owned by a customer, tracked end-to-end.
///
/// `budget` is a dollar amount; exactly `0.0` means "not set" and is
/// suppressed from summary views (a display convention, not a storage
/// invariant — the store only guarantees it is never negative).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub id: String,
    pub customer_id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub estimated_completion: Option<NaiveDate>,
    pub actual_completion: Option<NaiveDate>,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether the budget should appear in summary views.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        self.budget > 0.0
    }
}

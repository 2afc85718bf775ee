use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MilestoneStatus;

/// A discrete planned sub-goal within a project.
///
/// `order_index` defines display order (ascending); ties are broken stably
/// by whatever order the store returned.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
}

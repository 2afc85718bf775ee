use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UpdateType;

/// A timestamped narrative or photo entry posted against a project,
/// displayed newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub content: String,
    pub update_type: UpdateType,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Free-text author identifier as recorded by the back office.
    pub created_by: String,
}

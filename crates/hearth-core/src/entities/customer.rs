use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The account-holder record for a homeowner.
///
/// At most one customer exists per authenticated user; `user_id` is absent
/// for records not yet linked to a sign-in (the demo customer, or customers
/// created by the back office ahead of their first login).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub user_id: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

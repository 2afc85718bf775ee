//! The capability interface both data sources satisfy.

use async_trait::async_trait;

use hearth_core::entities::{Customer, Milestone, Project, ProjectUpdate};

use crate::error::DataError;

/// Read-only access to customers, projects, milestones, and updates.
///
/// Every operation is side-effect-free. Absence of a row is a valid result
/// (`Ok(None)` / empty vec), distinguished from failure. Implementations
/// must honor the ordering contract stated on each method so the view layer
/// renders identically regardless of the active source.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// The customer linked to an authenticated user. At most one exists.
    async fn customer_for_user(&self, user_id: &str) -> Result<Option<Customer>, DataError>;

    /// All projects owned by a customer, newest-created-first.
    async fn projects_for_customer(&self, customer_id: &str) -> Result<Vec<Project>, DataError>;

    /// A single project by id.
    async fn project_by_id(&self, project_id: &str) -> Result<Option<Project>, DataError>;

    /// A project's milestones, `order_index` ascending.
    async fn milestones_for_project(&self, project_id: &str)
    -> Result<Vec<Milestone>, DataError>;

    /// A project's updates, creation timestamp descending.
    async fn updates_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectUpdate>, DataError>;
}

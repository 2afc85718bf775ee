//! Static demo dataset for the unauthenticated portal.
//!
//! One fixed customer and three projects covering the `in_progress`,
//! `planning`, and `completed` statuses, each with synthetic milestones and
//! updates so the progress aggregation sees the same shape of input as the
//! live path. The dataset is generated once per session with freshly stamped
//! timestamps; dates are relative to the seed instant so the demo always
//! reads as current.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use hearth_core::entities::{Customer, Milestone, Project, ProjectUpdate};
use hearth_core::enums::{MilestoneStatus, ProjectStatus, UpdateType};
use hearth_core::progress::{milestones_in_display_order, updates_in_display_order};

use crate::error::DataError;
use crate::repository::ProjectRepository;

const DEMO_CUSTOMER_ID: &str = "demo-customer-1";

/// In-memory [`ProjectRepository`] backing the read-only demo.
///
/// Only active in unauthenticated sessions, so `customer_for_user` ignores
/// the user id and always answers with the demo homeowner. Reads never fail.
pub struct DemoStore {
    customer: Customer,
    projects: Vec<Project>,
    milestones: Vec<Milestone>,
    updates: Vec<ProjectUpdate>,
}

impl DemoStore {
    /// Build the dataset stamped at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Build the dataset stamped at a fixed instant (deterministic tests).
    #[must_use]
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        Self {
            customer: demo_customer(now),
            projects: demo_projects(now, today),
            milestones: demo_milestones(now, today),
            updates: demo_updates(now),
        }
    }

    /// The fixed demo homeowner.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }
}

impl Default for DemoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for DemoStore {
    async fn customer_for_user(&self, _user_id: &str) -> Result<Option<Customer>, DataError> {
        Ok(Some(self.customer.clone()))
    }

    async fn projects_for_customer(&self, customer_id: &str) -> Result<Vec<Project>, DataError> {
        if customer_id != self.customer.id {
            return Ok(Vec::new());
        }
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn project_by_id(&self, project_id: &str) -> Result<Option<Project>, DataError> {
        Ok(self.projects.iter().find(|p| p.id == project_id).cloned())
    }

    async fn milestones_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<Milestone>, DataError> {
        let matching = self
            .milestones
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect();
        Ok(milestones_in_display_order(matching))
    }

    async fn updates_for_project(
        &self,
        project_id: &str,
    ) -> Result<Vec<ProjectUpdate>, DataError> {
        let matching = self
            .updates
            .iter()
            .filter(|u| u.project_id == project_id)
            .cloned()
            .collect();
        Ok(updates_in_display_order(matching))
    }
}

fn demo_customer(now: DateTime<Utc>) -> Customer {
    Customer {
        id: DEMO_CUSTOMER_ID.to_string(),
        user_id: None,
        full_name: "Demo Homeowner".to_string(),
        email: "demo@example.com".to_string(),
        phone: "(555) 555-5555".to_string(),
        address: "123 Demo Street, Fallbrook, CA".to_string(),
        created_at: now,
    }
}

fn demo_projects(now: DateTime<Utc>, today: NaiveDate) -> Vec<Project> {
    let project = |id: &str,
                   title: &str,
                   description: &str,
                   status: ProjectStatus,
                   start_date: Option<NaiveDate>,
                   estimated_completion: Option<NaiveDate>,
                   actual_completion: Option<NaiveDate>,
                   budget: f64,
                   age_minutes: i64| Project {
        id: id.to_string(),
        customer_id: DEMO_CUSTOMER_ID.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        start_date,
        estimated_completion,
        actual_completion,
        budget,
        // Staggered so the newest-first listing is deterministic.
        created_at: now - TimeDelta::minutes(age_minutes),
        updated_at: now,
    };

    vec![
        project(
            "demo-project-1",
            "Kitchen Remodel",
            "Full kitchen refresh with new cabinets, quartz countertops, and updated lighting.",
            ProjectStatus::InProgress,
            Some(today - TimeDelta::days(38)),
            Some(today + TimeDelta::days(37)),
            None,
            28_000.0,
            0,
        ),
        project(
            "demo-project-2",
            "Master Bathroom Upgrade",
            "Replace shower tile, install frameless glass, new vanity, and fixtures.",
            ProjectStatus::Planning,
            None,
            Some(today + TimeDelta::days(74)),
            None,
            14_500.0,
            1,
        ),
        project(
            "demo-project-3",
            "Backyard Patio + Turf",
            "Pour concrete patio, add artificial turf, irrigation touch-ups, and bistro lights.",
            ProjectStatus::Completed,
            Some(today - TimeDelta::days(120)),
            Some(today - TimeDelta::days(74)),
            Some(today - TimeDelta::days(81)),
            9_200.0,
            2,
        ),
    ]
}

fn demo_milestones(now: DateTime<Utc>, today: NaiveDate) -> Vec<Milestone> {
    let milestone = |id: &str,
                     project_id: &str,
                     title: &str,
                     description: &str,
                     status: MilestoneStatus,
                     due_in_days: Option<i64>,
                     completed_in_days: Option<i64>,
                     order_index: i64| Milestone {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        due_date: due_in_days.map(|d| today + TimeDelta::days(d)),
        completed_date: completed_in_days.map(|d| today + TimeDelta::days(d)),
        order_index,
        created_at: now,
    };

    vec![
        // Kitchen Remodel: 2 of 5 complete.
        milestone(
            "demo-ms-1",
            "demo-project-1",
            "Demolition and prep",
            "Remove old cabinets, cap plumbing, protect flooring.",
            MilestoneStatus::Completed,
            Some(-31),
            Some(-33),
            1,
        ),
        milestone(
            "demo-ms-2",
            "demo-project-1",
            "Cabinet installation",
            "Set boxes, hang doors, adjust hardware.",
            MilestoneStatus::Completed,
            Some(-14),
            Some(-10),
            2,
        ),
        milestone(
            "demo-ms-3",
            "demo-project-1",
            "Countertop templating and install",
            "Quartz templating, fabrication, and install.",
            MilestoneStatus::InProgress,
            Some(7),
            None,
            3,
        ),
        milestone(
            "demo-ms-4",
            "demo-project-1",
            "Lighting and electrical trim",
            "",
            MilestoneStatus::Pending,
            Some(21),
            None,
            4,
        ),
        milestone(
            "demo-ms-5",
            "demo-project-1",
            "Final walkthrough",
            "",
            MilestoneStatus::Pending,
            Some(35),
            None,
            5,
        ),
        // Master Bathroom Upgrade: nothing started.
        milestone(
            "demo-ms-6",
            "demo-project-2",
            "Design sign-off",
            "Confirm tile, glass, and vanity selections.",
            MilestoneStatus::Pending,
            Some(14),
            None,
            1,
        ),
        milestone(
            "demo-ms-7",
            "demo-project-2",
            "Material ordering",
            "",
            MilestoneStatus::Pending,
            Some(28),
            None,
            2,
        ),
        // Backyard Patio + Turf: everything done.
        milestone(
            "demo-ms-8",
            "demo-project-3",
            "Grading and forms",
            "",
            MilestoneStatus::Completed,
            Some(-108),
            Some(-109),
            1,
        ),
        milestone(
            "demo-ms-9",
            "demo-project-3",
            "Concrete pour and cure",
            "",
            MilestoneStatus::Completed,
            Some(-96),
            Some(-95),
            2,
        ),
        milestone(
            "demo-ms-10",
            "demo-project-3",
            "Turf, irrigation, and lighting",
            "",
            MilestoneStatus::Completed,
            Some(-82),
            Some(-81),
            3,
        ),
    ]
}

fn demo_updates(now: DateTime<Utc>) -> Vec<ProjectUpdate> {
    let update = |id: &str,
                  project_id: &str,
                  title: &str,
                  content: &str,
                  update_type: UpdateType,
                  image_url: Option<&str>,
                  age_hours: i64,
                  created_by: &str| ProjectUpdate {
        id: id.to_string(),
        project_id: project_id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        update_type,
        image_url: image_url.map(String::from),
        created_at: now - TimeDelta::hours(age_hours),
        created_by: created_by.to_string(),
    };

    vec![
        update(
            "demo-upd-1",
            "demo-project-1",
            "Cabinets are in",
            "All boxes set and doors hung. Crew starts countertop templating next.",
            UpdateType::Progress,
            None,
            52,
            "Alvarez Crew",
        ),
        update(
            "demo-upd-2",
            "demo-project-1",
            "Quartz slab on backorder",
            "Supplier pushed the slab delivery out a week. Install date shifts accordingly.",
            UpdateType::Issue,
            None,
            26,
            "Project Office",
        ),
        update(
            "demo-upd-3",
            "demo-project-1",
            "Backsplash options",
            "Two tile layouts mocked up against the new cabinets.",
            UpdateType::Photo,
            Some("https://demo.example.com/photos/backsplash-options.jpg"),
            5,
            "Design Team",
        ),
        update(
            "demo-upd-4",
            "demo-project-2",
            "Kickoff scheduled",
            "Design review booked for the coming week. No site work before then.",
            UpdateType::Progress,
            None,
            70,
            "Project Office",
        ),
        update(
            "demo-upd-5",
            "demo-project-3",
            "Final photos",
            "Turf and bistro lights wrapped up.",
            UpdateType::Photo,
            Some("https://demo.example.com/photos/patio-final.jpg"),
            1_950,
            "Alvarez Crew",
        ),
        update(
            "demo-upd-6",
            "demo-project-3",
            "Project complete",
            "Walkthrough signed off a week ahead of estimate.",
            UpdateType::Completion,
            None,
            1_944,
            "Project Office",
        ),
    ]
}

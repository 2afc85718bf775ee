//! Progress aggregation and display-ordering rules.
//!
//! [`ProgressSummary`] reduces a project's milestones to the counts and
//! percentage behind the detail view's progress bar. The ordering helpers
//! are the single definition of display order, shared by both data sources
//! and the renderer, so a store returning rows in any order still renders
//! identically.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Milestone, ProjectUpdate};
use crate::enums::MilestoneStatus;

/// Derived progress view data computed from a project's milestones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProgressSummary {
    /// Number of milestones with status `completed`.
    pub completed: usize,
    /// Total number of milestones.
    pub total: usize,
    /// `completed / total * 100`, or exactly `0.0` when there are no
    /// milestones (never NaN, never 100 for an empty set).
    pub percent: f64,
}

impl ProgressSummary {
    /// Summarize a milestone sequence. Only counts drive the result, so the
    /// input order is irrelevant.
    #[must_use]
    pub fn from_milestones(milestones: &[Milestone]) -> Self {
        let total = milestones.len();
        let completed = milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count();
        #[allow(clippy::cast_precision_loss)]
        let percent = if total > 0 {
            (completed as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    /// The "2 of 4 milestones" caption next to the progress bar.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} of {} milestones", self.completed, self.total)
    }
}

/// Sort milestones for display: `order_index` ascending, ties kept stable.
#[must_use]
pub fn milestones_in_display_order(mut milestones: Vec<Milestone>) -> Vec<Milestone> {
    milestones.sort_by_key(|m| m.order_index);
    milestones
}

/// Sort updates for display: creation timestamp descending, ties kept stable.
#[must_use]
pub fn updates_in_display_order(mut updates: Vec<ProjectUpdate>) -> Vec<ProjectUpdate> {
    updates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    updates
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::UpdateType;

    fn milestone(id: &str, status: MilestoneStatus, order_index: i64) -> Milestone {
        Milestone {
            id: id.to_string(),
            project_id: "prj-1".to_string(),
            title: format!("Milestone {id}"),
            description: String::new(),
            status,
            due_date: None,
            completed_date: None,
            order_index,
            created_at: Utc::now(),
        }
    }

    fn update(id: &str, minutes_ago: i64) -> ProjectUpdate {
        ProjectUpdate {
            id: id.to_string(),
            project_id: "prj-1".to_string(),
            title: format!("Update {id}"),
            content: String::new(),
            update_type: UpdateType::Progress,
            image_url: None,
            created_at: Utc::now() - TimeDelta::minutes(minutes_ago),
            created_by: "Site Manager".to_string(),
        }
    }

    #[test]
    fn empty_milestones_summarize_to_zero() {
        let summary = ProgressSummary::from_milestones(&[]);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.percent, 0.0);
    }

    #[test]
    fn two_of_four_is_fifty_percent() {
        let milestones = vec![
            milestone("ms-1", MilestoneStatus::Completed, 0),
            milestone("ms-2", MilestoneStatus::Completed, 1),
            milestone("ms-3", MilestoneStatus::InProgress, 2),
            milestone("ms-4", MilestoneStatus::Pending, 3),
        ];
        let summary = ProgressSummary::from_milestones(&milestones);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.percent, 50.0);
        assert_eq!(summary.caption(), "2 of 4 milestones");
    }

    #[test]
    fn summary_is_invariant_under_reordering() {
        let mut milestones = vec![
            milestone("ms-1", MilestoneStatus::Completed, 0),
            milestone("ms-2", MilestoneStatus::Pending, 1),
            milestone("ms-3", MilestoneStatus::Completed, 2),
        ];
        let forward = ProgressSummary::from_milestones(&milestones);
        milestones.reverse();
        let reversed = ProgressSummary::from_milestones(&milestones);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn percent_stays_within_bounds() {
        for completed_count in 0..=5usize {
            let milestones: Vec<Milestone> = (0..5)
                .map(|i| {
                    let status = if (i as usize) < completed_count {
                        MilestoneStatus::Completed
                    } else {
                        MilestoneStatus::Pending
                    };
                    milestone(&format!("ms-{i}"), status, i)
                })
                .collect();
            let summary = ProgressSummary::from_milestones(&milestones);
            assert!(summary.completed <= summary.total);
            assert!((0.0..=100.0).contains(&summary.percent));
        }
    }

    #[test]
    fn all_completed_is_one_hundred_percent() {
        let milestones = vec![
            milestone("ms-1", MilestoneStatus::Completed, 0),
            milestone("ms-2", MilestoneStatus::Completed, 1),
        ];
        let summary = ProgressSummary::from_milestones(&milestones);
        assert_eq!(summary.percent, 100.0);
    }

    #[test]
    fn milestones_sort_by_order_index_regardless_of_input_order() {
        let shuffled = vec![
            milestone("ms-c", MilestoneStatus::Pending, 7),
            milestone("ms-a", MilestoneStatus::Completed, 1),
            milestone("ms-b", MilestoneStatus::InProgress, 3),
        ];
        let sorted = milestones_in_display_order(shuffled);
        let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ms-a", "ms-b", "ms-c"]);
    }

    #[test]
    fn milestone_order_ties_are_stable() {
        let tied = vec![
            milestone("ms-first", MilestoneStatus::Pending, 2),
            milestone("ms-second", MilestoneStatus::Pending, 2),
            milestone("ms-zero", MilestoneStatus::Pending, 0),
        ];
        let sorted = milestones_in_display_order(tied);
        let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ms-zero", "ms-first", "ms-second"]);
    }

    #[test]
    fn updates_sort_newest_first_regardless_of_input_order() {
        let shuffled = vec![update("upd-old", 90), update("upd-new", 5), update("upd-mid", 30)];
        let sorted = updates_in_display_order(shuffled);
        let ids: Vec<&str> = sorted.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["upd-new", "upd-mid", "upd-old"]);
    }
}

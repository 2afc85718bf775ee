//! Milestone timeline rendering.

use hearth_core::entities::Milestone;
use hearth_core::enums::MilestoneStatus;
use hearth_core::progress::milestones_in_display_order;

use crate::views::format::format_date;
use crate::views::{Theme, milestone_status_color};

/// Render the timeline, imposing display order itself so every rendering
/// context shows `order_index` ascending regardless of input order.
#[must_use]
pub fn render_milestone_timeline(milestones: &[Milestone], theme: &Theme) -> String {
    if milestones.is_empty() {
        return "No milestones defined yet".to_string();
    }

    let ordered = milestones_in_display_order(milestones.to_vec());
    let mut lines = Vec::new();
    for milestone in &ordered {
        lines.extend(milestone_entry(milestone, theme));
    }
    lines.join("\n")
}

fn milestone_entry(milestone: &Milestone, theme: &Theme) -> Vec<String> {
    let marker = status_marker(milestone.status);
    let badge = theme.paint(
        milestone.status.label(),
        milestone_status_color(milestone.status),
    );

    let mut lines = vec![format!("{marker} {}  [{badge}]", milestone.title)];
    if !milestone.description.is_empty() {
        lines.push(format!("    {}", milestone.description));
    }

    let mut dates = vec![format!(
        "Due: {}",
        format_date(milestone.due_date, &theme.date_format, "—")
    )];
    if milestone.completed_date.is_some() {
        dates.push(format!(
            "Completed: {}",
            format_date(milestone.completed_date, &theme.date_format, "—")
        ));
    }
    lines.push(format!("    {}", dates.join(" · ")));
    lines
}

const fn status_marker(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Pending => "○",
        MilestoneStatus::InProgress => "◷",
        MilestoneStatus::Completed => "✔",
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn milestone(id: &str, status: MilestoneStatus, order_index: i64) -> Milestone {
        Milestone {
            id: id.into(),
            project_id: "prj-1".into(),
            title: format!("Milestone {id}"),
            description: String::new(),
            status,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 14),
            completed_date: None,
            order_index,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_timeline_has_explicit_zero_state() {
        assert_eq!(
            render_milestone_timeline(&[], &Theme::plain()),
            "No milestones defined yet"
        );
    }

    #[test]
    fn renders_ascending_order_regardless_of_input_order() {
        let shuffled = vec![
            milestone("late", MilestoneStatus::Pending, 9),
            milestone("first", MilestoneStatus::Completed, 1),
            milestone("middle", MilestoneStatus::InProgress, 4),
        ];
        let out = render_milestone_timeline(&shuffled, &Theme::plain());

        let first = out.find("Milestone first").unwrap();
        let middle = out.find("Milestone middle").unwrap();
        let late = out.find("Milestone late").unwrap();
        assert!(first < middle && middle < late);
    }

    #[test]
    fn marker_and_label_follow_status() {
        let out = render_milestone_timeline(
            &[milestone("done", MilestoneStatus::Completed, 1)],
            &Theme::plain(),
        );
        assert!(out.starts_with("✔ "));
        assert!(out.contains("[Completed]"));
    }

    #[test]
    fn due_date_renders_with_placeholder_when_absent() {
        let mut undated = milestone("tbd", MilestoneStatus::Pending, 1);
        undated.due_date = None;
        let out = render_milestone_timeline(&[undated], &Theme::plain());
        assert!(out.contains("Due: —"));
    }

    #[test]
    fn completed_date_appears_only_when_present() {
        let mut done = milestone("done", MilestoneStatus::Completed, 1);
        done.completed_date = NaiveDate::from_ymd_opt(2025, 10, 6);
        let out = render_milestone_timeline(&[done], &Theme::plain());
        assert!(out.contains("Completed: Oct 6, 2025"));

        let pending = milestone("todo", MilestoneStatus::Pending, 1);
        let out = render_milestone_timeline(&[pending], &Theme::plain());
        assert!(!out.contains("Completed:"));
    }
}

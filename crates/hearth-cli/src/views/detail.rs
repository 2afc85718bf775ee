//! Project detail rendering: header, info grid, progress bar, tabs.

use crate::portal::{DetailView, Tab};
use crate::views::format::{format_currency, format_date};
use crate::views::{Theme, feed, project_status_color, timeline};

const BAR_WIDTH: usize = 30;

/// Render the full detail view for the active tab.
#[must_use]
pub fn render_project_detail(detail: &DetailView, theme: &Theme) -> String {
    let project = &detail.project;
    let badge = theme.paint(project.status.label(), project_status_color(project.status));

    let mut lines = vec![format!(
        "{}  [{badge}]",
        theme.paint(&project.title, "1")
    )];
    if !project.description.is_empty() {
        lines.push(project.description.clone());
    }
    lines.push(String::new());

    lines.push(format!(
        "Start Date:         {}",
        format_date(project.start_date, &theme.date_format, "Not scheduled")
    ));
    lines.push(format!(
        "Est. Completion:    {}",
        format_date(
            project.estimated_completion,
            &theme.date_format,
            "Not scheduled"
        )
    ));
    lines.push(format!(
        "Actual Completion:  {}",
        format_date(project.actual_completion, &theme.date_format, "—")
    ));
    if project.has_budget() {
        lines.push(format!(
            "Budget:             {}",
            format_currency(project.budget, &theme.currency_symbol)
        ));
    }

    if detail.summary.total > 0 {
        lines.push(String::new());
        lines.push(format!(
            "Overall Progress:   {} {:.0}%  ({})",
            progress_bar(detail.summary.percent, BAR_WIDTH),
            detail.summary.percent,
            detail.summary.caption()
        ));
    }

    lines.push(String::new());
    lines.push(tab_bar(detail));
    lines.push(String::new());

    let body = match detail.tab {
        Tab::Milestones => timeline::render_milestone_timeline(&detail.milestones, theme),
        Tab::Updates => feed::render_update_feed(&detail.updates, theme),
    };
    lines.push(body);

    lines.join("\n")
}

fn tab_bar(detail: &DetailView) -> String {
    let milestones = format!("Milestones ({})", detail.milestones.len());
    let updates = format!("Updates ({})", detail.updates.len());
    match detail.tab {
        Tab::Milestones => format!("[ {milestones} ]   {updates}"),
        Tab::Updates => format!("{milestones}   [ {updates} ]"),
    }
}

/// Fixed-width progress bar, filled proportionally to `percent`.
fn progress_bar(percent: f64, width: usize) -> String {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use pretty_assertions::assert_eq;

    use hearth_core::entities::{Milestone, Project};
    use hearth_core::enums::{MilestoneStatus, ProjectStatus};
    use hearth_core::progress::ProgressSummary;

    use super::*;

    fn milestone(id: &str, status: MilestoneStatus, order_index: i64) -> Milestone {
        Milestone {
            id: id.into(),
            project_id: "prj-1".into(),
            title: format!("Milestone {id}"),
            description: String::new(),
            status,
            due_date: None,
            completed_date: None,
            order_index,
            created_at: Utc::now(),
        }
    }

    fn detail_view(milestones: Vec<Milestone>, budget: f64) -> DetailView {
        let summary = ProgressSummary::from_milestones(&milestones);
        DetailView {
            project: Project {
                id: "prj-1".into(),
                customer_id: "cus-1".into(),
                title: "Kitchen Remodel".into(),
                description: "Full kitchen refresh.".into(),
                status: ProjectStatus::InProgress,
                start_date: NaiveDate::from_ymd_opt(2025, 10, 1),
                estimated_completion: None,
                actual_completion: None,
                budget,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            milestones,
            updates: Vec::new(),
            summary,
            tab: Tab::Milestones,
        }
    }

    fn four_milestones_half_done() -> Vec<Milestone> {
        vec![
            milestone("ms-1", MilestoneStatus::Completed, 1),
            milestone("ms-2", MilestoneStatus::Completed, 2),
            milestone("ms-3", MilestoneStatus::InProgress, 3),
            milestone("ms-4", MilestoneStatus::Pending, 4),
        ]
    }

    #[test]
    fn bar_is_empty_at_zero_percent() {
        assert_eq!(progress_bar(0.0, 10), "[----------]");
    }

    #[test]
    fn bar_is_half_full_at_fifty_percent() {
        assert_eq!(progress_bar(50.0, 10), "[#####-----]");
    }

    #[test]
    fn bar_is_full_at_one_hundred_percent() {
        assert_eq!(progress_bar(100.0, 10), "[##########]");
    }

    #[test]
    fn half_done_project_shows_fifty_percent_and_caption() {
        let out = render_project_detail(&detail_view(four_milestones_half_done(), 0.0), &Theme::plain());
        assert!(out.contains("50%"));
        assert!(out.contains("2 of 4 milestones"));
    }

    #[test]
    fn progress_section_is_absent_without_milestones() {
        let out = render_project_detail(&detail_view(vec![], 0.0), &Theme::plain());
        assert!(!out.contains("Overall Progress"));
        assert!(out.contains("No milestones defined yet"));
    }

    #[test]
    fn budget_line_suppressed_when_zero_in_detail_too() {
        let out = render_project_detail(&detail_view(vec![], 0.0), &Theme::plain());
        assert!(!out.contains("Budget:"));

        let out = render_project_detail(&detail_view(vec![], 28_000.0), &Theme::plain());
        assert!(out.contains("Budget:             $28,000"));
    }

    #[test]
    fn optional_dates_always_render_placeholders() {
        let out = render_project_detail(&detail_view(vec![], 0.0), &Theme::plain());
        assert!(out.contains("Start Date:         Oct 1, 2025"));
        assert!(out.contains("Est. Completion:    Not scheduled"));
        assert!(out.contains("Actual Completion:  —"));
    }

    #[test]
    fn tab_bar_marks_the_active_tab() {
        let mut view = detail_view(four_milestones_half_done(), 0.0);
        assert!(tab_bar(&view).starts_with("[ Milestones (4) ]"));

        view.tab = Tab::Updates;
        assert!(tab_bar(&view).ends_with("[ Updates (0) ]"));
    }

    #[test]
    fn updates_tab_renders_feed_body() {
        let mut view = detail_view(four_milestones_half_done(), 0.0);
        view.tab = Tab::Updates;
        let out = render_project_detail(&view, &Theme::plain());
        assert!(out.contains("No updates yet"));
        assert!(!out.contains("Milestone ms-1"));
    }
}

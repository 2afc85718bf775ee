//! Project list rendering: the dashboard's card blocks and table form.

use hearth_core::entities::Project;

use crate::output::table::{self, TableOptions};
use crate::portal::ListView;
use crate::views::format::{format_currency, format_date};
use crate::views::{Theme, project_status_color};

/// Render the list view as numbered cards. The numbers are what `browse`'s
/// `open <n>` refers to.
#[must_use]
pub fn render_project_list(list: &ListView, theme: &Theme) -> String {
    let mut lines = header_lines(list, theme);
    lines.push(String::new());

    if list.projects.is_empty() {
        lines.push("No projects yet".to_string());
        lines.push("Your renovation projects will appear here once they're created.".to_string());
        return lines.join("\n");
    }

    for (index, project) in list.projects.iter().enumerate() {
        lines.extend(project_card(index + 1, project, theme));
        lines.push(String::new());
    }
    lines.pop();
    lines.join("\n")
}

/// Render the list view as an aligned table (`--format table`).
#[must_use]
pub fn render_project_table(list: &ListView, theme: &Theme, max_width: Option<usize>) -> String {
    let headers = ["#", "title", "status", "started", "est. completion", "budget"];
    let rows: Vec<Vec<String>> = list
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            vec![
                (index + 1).to_string(),
                project.title.clone(),
                project.status.to_string(),
                format_date(project.start_date, &theme.date_format, "Not scheduled"),
                format_date(
                    project.estimated_completion,
                    &theme.date_format,
                    "Not scheduled",
                ),
                if project.has_budget() {
                    format_currency(project.budget, &theme.currency_symbol)
                } else {
                    "-".to_string()
                },
            ]
        })
        .collect();

    table::render_entity_table(
        &headers,
        &rows,
        TableOptions {
            max_width,
            color: theme.color,
        },
    )
}

fn header_lines(list: &ListView, theme: &Theme) -> Vec<String> {
    if list.demo {
        let mut lines = vec![
            theme.paint("Home Renovation Portal (Demo)", "1"),
            "Public demo view. Open projects to explore; log in to see real data.".to_string(),
        ];
        if let Some(customer) = &list.customer {
            lines.push(String::new());
            lines.push(customer.full_name.clone());
            lines.push(format!("{} · {}", customer.address, customer.email));
        }
        lines
    } else {
        let mut lines = vec![
            theme.paint("Your Projects", "1"),
            "Track the progress of your home renovation projects".to_string(),
        ];
        if let Some(customer) = &list.customer {
            lines.push(format!("Signed in as {}", customer.full_name));
        }
        lines
    }
}

fn project_card(number: usize, project: &Project, theme: &Theme) -> Vec<String> {
    let badge = theme.paint(
        project.status.label(),
        project_status_color(project.status),
    );
    let description = if project.description.is_empty() {
        "No description provided".to_string()
    } else {
        project.description.clone()
    };

    let mut facts = vec![
        format!(
            "Started: {}",
            format_date(project.start_date, &theme.date_format, "Not scheduled")
        ),
        format!(
            "Est. completion: {}",
            format_date(
                project.estimated_completion,
                &theme.date_format,
                "Not scheduled"
            )
        ),
    ];
    if project.has_budget() {
        facts.push(format!(
            "Budget: {}",
            format_currency(project.budget, &theme.currency_symbol)
        ));
    }

    vec![
        format!("{number:>2}. {}  [{badge}]", project.title),
        format!("    {description}"),
        format!("    {}", facts.join(" · ")),
    ]
}

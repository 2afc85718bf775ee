use serde_json::json;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;
use crate::portal::View;
use crate::ui;
use crate::views;

/// `hearth projects` — load and render the list view once.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portal = ctx.portal();

    let spinner = ui::loading_spinner("Loading your projects...");
    portal.load_dashboard().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let theme = ctx.theme();
    let rendered = match (flags.format, portal.view()) {
        (OutputFormat::Json, View::List(list)) => output::render_json(&json!({
            "customer": list.customer,
            "projects": list.projects,
            "demo": list.demo,
        }))?,
        (OutputFormat::Table, View::List(list)) => {
            let mut out = views::list::render_project_table(list, &theme, ui::prefs().term_width);
            if list.projects.is_empty() {
                out = "No projects yet".to_string();
            }
            out
        }
        (_, view) => views::render_view(view, &theme),
    };

    println!("{rendered}");
    Ok(())
}

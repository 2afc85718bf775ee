use serde_json::json;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output;
use crate::portal::{Tab, View};
use crate::ui;
use crate::views;

/// `hearth project <id> [--tab]` — load and render one project's detail.
pub async fn run(
    project_id: &str,
    tab: Tab,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut portal = ctx.portal();

    let spinner = ui::loading_spinner("Loading project...");
    portal.select(project_id).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    portal.set_tab(tab);

    let theme = ctx.theme();
    let rendered = match (flags.format, portal.view()) {
        (OutputFormat::Json, View::Detail(detail)) => output::render_json(&json!({
            "project": detail.project,
            "milestones": detail.milestones,
            "updates": detail.updates,
            "progress": detail.summary,
        }))?,
        (_, view) => views::render_view(view, &theme),
    };

    println!("{rendered}");
    Ok(())
}

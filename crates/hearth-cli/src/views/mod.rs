//! Presentation components.
//!
//! Every function here is a pure function of its inputs: view state in,
//! rendered string out. Nothing in this module loads data or mutates the
//! portal. Status-to-label and status-to-color mappings are total over the
//! closed enumerations — an out-of-enumeration value can never reach this
//! layer because decoding already rejected it.

pub mod detail;
pub mod feed;
pub mod format;
pub mod list;
pub mod timeline;

use hearth_config::UiConfig;
use hearth_core::enums::{MilestoneStatus, ProjectStatus, UpdateType};

use crate::portal::View;

/// Rendering preferences threaded through every view.
#[derive(Debug, Clone)]
pub struct Theme {
    pub color: bool,
    pub date_format: String,
    pub currency_symbol: String,
}

impl Theme {
    #[must_use]
    pub fn from_config(ui: &UiConfig, color: bool) -> Self {
        Self {
            color,
            date_format: ui.date_format.clone(),
            currency_symbol: ui.currency_symbol.clone(),
        }
    }

    /// Colorless theme with default formats (tests, JSON-adjacent output).
    #[must_use]
    pub fn plain() -> Self {
        Self::from_config(&UiConfig::default(), false)
    }

    pub(crate) fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }
}

/// ANSI color for a project status badge. Total over the enumeration.
pub(crate) const fn project_status_color(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "36",
        ProjectStatus::InProgress => "34",
        ProjectStatus::Completed => "32",
        ProjectStatus::OnHold => "33",
    }
}

/// ANSI color for a milestone status badge. Total over the enumeration.
pub(crate) const fn milestone_status_color(status: MilestoneStatus) -> &'static str {
    match status {
        MilestoneStatus::Pending => "90",
        MilestoneStatus::InProgress => "34",
        MilestoneStatus::Completed => "32",
    }
}

/// ANSI color for an update type badge. Total over the enumeration.
pub(crate) const fn update_type_color(update_type: UpdateType) -> &'static str {
    match update_type {
        UpdateType::Progress => "34",
        UpdateType::Issue => "33",
        UpdateType::Completion => "32",
        UpdateType::Photo => "35",
    }
}

/// Render whatever view the portal is currently in.
#[must_use]
pub fn render_view(view: &View, theme: &Theme) -> String {
    match view {
        View::Loading => "Loading...".to_string(),
        View::List(list_view) => list::render_project_list(list_view, theme),
        View::Detail(detail_view) => detail::render_project_detail(detail_view, theme),
        View::LoginPrompt => render_login_prompt(),
        View::Missing { project_id } => render_missing(project_id),
        View::Unavailable {
            what,
            reason,
            retryable,
        } => render_unavailable(what, reason, *retryable),
    }
}

fn render_login_prompt() -> String {
    [
        "Sign in to Hearth",
        "",
        "Sign in on the web portal, then hand the session token to this CLI:",
        "",
        "    hearth login --token <session-token>",
        "",
        "Your live projects replace the demo data once you are signed in.",
    ]
    .join("\n")
}

fn render_missing(project_id: &str) -> String {
    format!(
        "Project not found\n\nNo project with id '{project_id}' is visible to this account."
    )
}

fn render_unavailable(what: &str, reason: &str, retryable: bool) -> String {
    let advice = if retryable {
        "Try again in a moment by re-running the same command."
    } else {
        "This looks like a data problem on the server side; retrying will not help."
    };
    format!("Could not load {what}\n\n{reason}\n{advice}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paint_is_identity_without_color() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("Completed", "32"), "Completed");
    }

    #[test]
    fn paint_wraps_with_ansi_when_colored() {
        let theme = Theme {
            color: true,
            ..Theme::plain()
        };
        assert_eq!(theme.paint("Completed", "32"), "\u{1b}[32mCompleted\u{1b}[0m");
    }

    #[test]
    fn loading_view_is_explicit() {
        assert_eq!(render_view(&View::Loading, &Theme::plain()), "Loading...");
    }

    #[test]
    fn missing_view_names_the_project() {
        let view = View::Missing {
            project_id: "prj-404".into(),
        };
        let out = render_view(&view, &Theme::plain());
        assert!(out.contains("Project not found"));
        assert!(out.contains("prj-404"));
    }

    #[test]
    fn unavailable_view_distinguishes_retryable() {
        let retryable = render_unavailable("your projects", "store unreachable", true);
        assert!(retryable.contains("Try again"));

        let fatal = render_unavailable("project detail", "out-of-enumeration", false);
        assert!(fatal.contains("retrying will not help"));
    }

    #[test]
    fn login_prompt_hands_off_to_cli_login() {
        let out = render_login_prompt();
        assert!(out.contains("hearth login --token"));
    }
}

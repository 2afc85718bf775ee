use std::io::{BufRead, Write as _};
use std::sync::Arc;

use hearth_data::DemoStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::portal::{Portal, Tab, View};
use crate::ui;
use crate::views;

/// One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Open(String),
    Back,
    Tab(Tab),
    Login,
    Logout,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

const HELP: &str = "\
Commands:
  open <n|id>        open a project by list number or id
  back               return to the project list
  tab milestones     show the milestones tab
  tab updates        show the updates tab
  login              sign-in instructions (demo)
  logout             sign out and return to demo data
  refresh            reload the current list
  quit               leave the portal";

/// `hearth browse` — interactive portal session driving the full
/// view-state machine.
pub async fn run(mut ctx: AppContext, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = ctx.theme();
    let mut portal = ctx.portal();

    let spinner = ui::loading_spinner("Loading your projects...");
    portal.load_dashboard().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    println!("{}", views::render_view(portal.view(), &theme));
    println!();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("hearth> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let command = parse_command(&line?);

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            }
            BrowseCommand::Unknown(word) => {
                println!("Unknown command '{word}' (try 'help')");
                continue;
            }
            BrowseCommand::Open(target) => {
                let Some(project_id) = resolve_target(&portal, &target) else {
                    println!("No project '{target}' in the list (use its number or id)");
                    continue;
                };
                let spinner = ui::loading_spinner("Loading project...");
                portal.select(&project_id).await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
            }
            BrowseCommand::Back => portal.back(),
            BrowseCommand::Tab(tab) => portal.set_tab(tab),
            BrowseCommand::Login => {
                if portal.is_demo() {
                    portal.open_login();
                } else {
                    println!("Already signed in (use 'logout' to switch to demo data)");
                    continue;
                }
            }
            BrowseCommand::Logout => {
                ctx.auth.sign_out()?;
                portal.switch_source(Arc::new(DemoStore::new()), None, true);
                let spinner = ui::loading_spinner("Loading demo projects...");
                portal.load_dashboard().await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
            }
            BrowseCommand::Refresh => {
                let spinner = ui::loading_spinner("Reloading...");
                portal.load_dashboard().await;
                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }
            }
        }

        println!("{}", views::render_view(portal.view(), &theme));
        println!();
    }

    Ok(())
}

fn parse_command(line: &str) -> BrowseCommand {
    let mut words = line.split_whitespace();
    match words.next() {
        None => BrowseCommand::Help,
        Some("open" | "o") => words.next().map_or_else(
            || BrowseCommand::Unknown("open (needs a number or id)".to_string()),
            |target| BrowseCommand::Open(target.to_string()),
        ),
        Some("back" | "b") => BrowseCommand::Back,
        Some("tab" | "t") => match words.next() {
            Some("milestones" | "m") => BrowseCommand::Tab(Tab::Milestones),
            Some("updates" | "u") => BrowseCommand::Tab(Tab::Updates),
            other => BrowseCommand::Unknown(format!("tab {}", other.unwrap_or(""))),
        },
        Some("login") => BrowseCommand::Login,
        Some("logout") => BrowseCommand::Logout,
        Some("refresh" | "r") => BrowseCommand::Refresh,
        Some("help" | "h" | "?") => BrowseCommand::Help,
        Some("quit" | "q" | "exit") => BrowseCommand::Quit,
        Some(other) => BrowseCommand::Unknown(other.to_string()),
    }
}

/// Map a list number to a project id; pass ids through untouched.
fn resolve_target(portal: &Portal, target: &str) -> Option<String> {
    if let Ok(number) = target.parse::<usize>() {
        let View::List(list) = portal.view() else {
            return None;
        };
        return list
            .projects
            .get(number.checked_sub(1)?)
            .map(|p| p.id.clone());
    }
    Some(target.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_open_with_target() {
        assert_eq!(parse_command("open 2"), BrowseCommand::Open("2".into()));
        assert_eq!(
            parse_command("o demo-project-1"),
            BrowseCommand::Open("demo-project-1".into())
        );
    }

    #[test]
    fn parses_tab_variants() {
        assert_eq!(parse_command("tab updates"), BrowseCommand::Tab(Tab::Updates));
        assert_eq!(parse_command("t m"), BrowseCommand::Tab(Tab::Milestones));
    }

    #[test]
    fn parses_navigation_and_session_words() {
        assert_eq!(parse_command("back"), BrowseCommand::Back);
        assert_eq!(parse_command("login"), BrowseCommand::Login);
        assert_eq!(parse_command("logout"), BrowseCommand::Logout);
        assert_eq!(parse_command("refresh"), BrowseCommand::Refresh);
        assert_eq!(parse_command("q"), BrowseCommand::Quit);
    }

    #[test]
    fn blank_line_shows_help_not_error() {
        assert_eq!(parse_command("   "), BrowseCommand::Help);
    }

    #[test]
    fn unknown_words_are_reported_back() {
        assert_eq!(
            parse_command("delete everything"),
            BrowseCommand::Unknown("delete".into())
        );
    }
}

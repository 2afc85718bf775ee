use clap::{Parser, Subcommand, ValueEnum};

use crate::portal::Tab;

/// Top-level CLI parser for the `hearth` binary.
#[derive(Debug, Parser)]
#[command(name = "hearth", version, about = "Hearth - renovation tracking portal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, table, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Color: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Force the read-only demo data source, even when signed in
    #[arg(long, global = true)]
    pub demo: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the project list
    Projects,
    /// Show one project's detail: progress, milestones, updates
    Project {
        /// Project id
        id: String,
        /// Which tab to show
        #[arg(long, value_enum, default_value = "milestones")]
        tab: TabArg,
    },
    /// Interactively browse projects (open / back / tab / login / quit)
    Browse,
    /// Store a session token handed over by the web sign-in
    Login {
        /// Session token; omit to print sign-in instructions
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete the stored session token
    Logout,
    /// Show the current session and data source
    Whoami,
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

/// When to emit ANSI colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// `--tab` argument for the one-shot detail command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabArg {
    Milestones,
    Updates,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Milestones => Self::Milestones,
            TabArg::Updates => Self::Updates,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
    pub verbose: bool,
    pub demo: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            demo: self.demo,
        }
    }
}

use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod portal;
mod ui;
mod views;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("hearth error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let config = hearth_config::PortalConfig::load_with_dotenv()?;

    // Sign-in/out touch only the token store; they never need a data source.
    match &cli.command {
        cli::Commands::Login { token } => {
            return commands::login::run(token.as_deref(), &config, &flags);
        }
        cli::Commands::Logout => return commands::logout::run(&flags),
        _ => {}
    }

    let ctx = context::AppContext::init(config, flags.demo);

    match cli.command {
        cli::Commands::Projects => commands::projects::run(&ctx, &flags).await,
        cli::Commands::Project { id, tab } => {
            commands::project::run(&id, tab.into(), &ctx, &flags).await
        }
        cli::Commands::Browse => commands::browse::run(ctx, &flags).await,
        cli::Commands::Whoami => commands::whoami::run(&ctx, &flags),
        cli::Commands::Login { .. } | cli::Commands::Logout => unreachable!("handled above"),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HEARTH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

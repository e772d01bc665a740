//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, bootstraps the resource manager and
//! dispatches to a handler.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use respath_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables (RUST_LOG, RESPATH_SETTINGS)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match bootstrap(&CliConfig::from_cli(&cli)) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    match cli.command {
        Commands::Paths => handlers::paths::execute(&ctx),
        Commands::Resolve { name, dir } => handlers::resolve::execute(&ctx, &name, dir),
        Commands::Locales { json } => handlers::locales::execute(&ctx, json),
        Commands::Candidates { name, dir } => handlers::candidates::execute(&ctx, &name, dir),
    }
}

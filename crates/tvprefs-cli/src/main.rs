//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via bootstrap; command dispatch routes
//! to handlers which delegate to the preference registry.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tvprefs_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        // Paths never touches the database.
        Commands::Paths => handlers::paths::execute(cli.db.as_deref()),
        Commands::List { json } => handlers::list::execute(&open(cli.db).await?, json).await,
        Commands::Get { setting } => handlers::get::execute(&open(cli.db).await?, setting).await,
        Commands::Set { setting, value } => {
            handlers::set::execute(&open(cli.db).await?, setting, &value).await
        }
        Commands::Reset { setting, all: _ } => {
            handlers::reset::execute(&open(cli.db).await?, setting).await
        }
        Commands::Version => handlers::version::execute(&open(cli.db).await?).await,
    }
}

async fn open(db: Option<PathBuf>) -> anyhow::Result<CliContext> {
    bootstrap(CliConfig::resolve(db)?).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

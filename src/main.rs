mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use sitecraft_core::config::{ConfigManager, load_dotenv};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "sitecraft=debug,sitecraft_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    load_dotenv();

    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    debug!(
        workspace = %workspace.display(),
        config = ?manager.config_path(),
        "configuration loaded"
    );

    match args.command {
        Commands::Generate(generate) => cli::handle_generate_command(&manager, generate).await,
        Commands::Analyze { prompt, theme } => {
            cli::handle_analyze_command(&manager, &prompt, theme.as_deref())
        }
        Commands::Themes => cli::handle_themes_command(),
        Commands::Config { action } => cli::handle_config_command(manager, action, &workspace),
        Commands::Doctor { relay_url } => {
            cli::handle_doctor_command(&manager, relay_url.as_deref()).await
        }
    }
}

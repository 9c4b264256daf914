//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for sitecraft
#[derive(Parser, Debug)]
#[command(
    name = "sitecraft",
    version,
    about = "Turn a description and a theme into a complete, renderable web page"
)]
pub struct Cli {
    /// Configuration file path; overrides the workspace lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root directory; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a page from a description
    Generate(GenerateArgs),

    /// Show how a description maps to sections, features and style
    Analyze {
        /// Page description
        #[arg(required = true)]
        prompt: Vec<String>,

        /// Theme name (portfolio, tech, ecommerce, blog, saas)
        #[arg(long, short)]
        theme: Option<String>,
    },

    /// List the available themes and their colors
    Themes,

    /// Inspect or update the stored credential and relay URL
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Check the credential and the relay endpoint
    Doctor {
        /// Relay URL to check instead of the configured one
        #[arg(long)]
        relay_url: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Page description
    #[arg(required = true)]
    pub prompt: Vec<String>,

    /// Theme name (portfolio, tech, ecommerce, blog, saas)
    #[arg(long, short)]
    pub theme: Option<String>,

    /// Write the document here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip the external service and use the built-in template
    #[arg(long)]
    pub template_only: bool,

    /// Also package the page as a .tar.gz archive in this directory
    #[arg(long, value_name = "DIR")]
    pub archive: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration (secrets masked)
    Show,

    /// Write a sample sitecraft.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Store the service credential
    SetKey { key: String },

    /// Store the relay endpoint URL
    SetRelay { url: String },

    /// Remove the relay URL so the service is called directly
    ClearRelay,
}

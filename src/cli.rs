use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(version)]
#[command(about = "Enter, scale and reset recipes from the console")]
#[command(long_about = "recipebook keeps the recipes you enter during a session, \
lists them alphabetically, scales ingredient quantities, restores the original \
quantities and warns when a recipe goes over the calorie threshold.")]
pub struct Cli {
    /// Path to a config.toml (defaults to .recipebook/config.toml)
    #[arg(long, global = true, env = "RECIPEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the interactive recipe menu (default)
    Run,

    /// Write a default .recipebook/config.toml
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

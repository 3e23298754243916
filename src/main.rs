use anyhow::Result;
use clap::Parser;
use recipebook::cli::{Cli, Commands};
use recipebook::config::Config;
use recipebook::{commands, telemetry};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.display.color = false;
    }
    if !config.display.color {
        colored::control::set_override(false);
    }

    let _telemetry = telemetry::init_tracing(&config);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::menu::run(&config),
        Commands::Init { force } => commands::init::run(force),
        Commands::Config { json } => commands::config::run(&config, json),
        Commands::Version => commands::version::run(),
    }
}

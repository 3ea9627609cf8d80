mod api;
mod cli;
mod config;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    if let Some(city) = cli.city {
        config.schedule.city = city;
    }

    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&config)?,
        Some(Commands::Monthly) => handlers::handle_monthly(&config)?,
        Some(Commands::Cities) => handlers::handle_cities(&config),

        // No subcommand → launch the TUI dashboard
        None => tui::app::run(config)?,
    }

    Ok(())
}

//! Command implementations

mod models;
mod predict;
mod records;
mod reference;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli, output: &OutputWriter) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Predict(args) => predict::execute(args, &config, output),
        Commands::Add(args) => records::add(args, &config, output),
        Commands::Update(args) => records::update(args, &config, output),
        Commands::Delete(args) => records::delete(args, &config, output),
        Commands::Today => records::today(&config, output),
        Commands::Vehicles => reference::vehicles(&config, output),
        Commands::Cities => reference::cities(&config, output),
        Commands::Models(args) => models::execute(args, &config, output),
        Commands::Stats => reference::stats(&config, output),
        Commands::Config => reference::config(&config, output),
    }
}

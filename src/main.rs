mod cli;
mod commands;

use std::error::Error;

use clap::Parser;
use invedit::EditorConfig;
use tracing_subscriber::EnvFilter;

use cli::*;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = EditorConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { input, json } => commands::show(&input, &config, json)?,
        Commands::Tree { input, json } => commands::tree(&input, json)?,
        Commands::Set {
            input,
            slot,
            id,
            count,
            damage,
        } => commands::set(&input, &config, slot, id, count, damage)?,
        Commands::Clear { input, slot } => commands::clear(&input, &config, slot)?,
        Commands::New { output } => commands::new(&output, &config)?,
        Commands::Copy { input, output } => commands::copy(&input, &output, &config)?,
    }

    Ok(())
}

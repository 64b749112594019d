//! mealpause library root.
//! Exposes the CLI parser, the high-level run() function and the
//! scheduling engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Meals => cli::commands::meals::handle(cli),
        Commands::Pause { .. } => cli::commands::pause::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Cancel { .. } => cli::commands::cancel::handle(cli, cfg),
        Commands::Schedule { .. } => cli::commands::schedule::handle(cli, cfg),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test runs never read the user's config file.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    log::debug!("using database {}", cfg.database);
    dispatch(&cli, &cfg)
}

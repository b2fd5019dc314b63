//! rWorkHours library root.
//! Exposes the CLI parser, the high-level `run()` function, the calculator
//! form and engine, and the HTTP client for the remote service.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use ui::messages::warning;
use utils::path::expand_tilde;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // 2️⃣ load config once (init writes it, so it may not exist yet)
    let cfg_path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };
    let mut cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        // `config` must stay usable on a broken file so it can be fixed
        Commands::Config { .. } => Config::load_unchecked(&cfg_path).unwrap_or_else(|e| {
            warning(format!("{} (showing defaults)", e));
            Config::default()
        }),
        Commands::Calc { .. } => Config::load_from(&cfg_path)?,
    };

    // 3️⃣ command-line override of the service URL
    if let Some(url) = &cli.url {
        cfg.api_base_url = url.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path).await
}

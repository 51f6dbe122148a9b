//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind them: API client, local storage, editor and approval workflow.

pub mod api;
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
use cli::commands as cmd;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter
/// (e.g. `RTIMESHEET_LOG=rtimesheet=debug`).
pub const LOG_ENV: &str = "RTIMESHEET_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
        Commands::Login { .. } => cmd::auth::login(&cli.command, cfg),
        Commands::Logout => cmd::auth::logout(cfg),
        Commands::Profile => cmd::auth::profile(cfg),
        Commands::Theme { .. } => cmd::theme::handle(&cli.command, cfg),
        Commands::Projects => cmd::reference::projects(cfg),
        Commands::Tasks { .. } => cmd::reference::tasks(&cli.command, cfg),
        Commands::Employees => cmd::reference::employees(cfg),
        Commands::Fill { .. } => cmd::fill::handle(&cli.command, cfg),
        Commands::Sheet { .. } => cmd::sheet::handle(&cli.command, cfg),
        Commands::Send { .. } => cmd::sheet::send(&cli.command, cfg),
        Commands::Delete { .. } => cmd::delete::handle(&cli.command, cfg),
        Commands::Review { .. } => cmd::review::handle(&cli.command, cfg),
        Commands::Accept { .. } | Commands::Reject { .. } => cmd::review::decide(&cli.command, cfg),
        Commands::Export { .. } => cmd::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `--verbose` raises the default level to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(api) = &cli.api {
        cfg.api_url = api.clone();
    }
    tracing::debug!(api = %cfg.api_url, db = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}

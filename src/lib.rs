//! catercal library root.
//! Exposes the CLI parser, the high-level `run()` function and the domain,
//! store and persistence modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "CATERCAL_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    tracing::info!("command: {}", command_name(&cli.command));
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Event { .. } => cli::commands::event::handle(&cli.command, ctx),
        Commands::Receipt { .. } => cli::commands::receipt::handle(&cli.command, ctx),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

fn command_name(cmd: &Commands) -> &'static str {
    match cmd {
        Commands::Init => "init",
        Commands::Config { .. } => "config",
        Commands::Event { .. } => "event",
        Commands::Receipt { .. } => "receipt",
        Commands::Calendar { .. } => "calendar",
        Commands::Summary { .. } => "summary",
        Commands::Db { .. } => "db",
        Commands::Log { .. } => "log",
        Commands::Backup { .. } => "backup",
        Commands::Export { .. } => "export",
    }
}

/// Install the stderr subscriber. `CATERCAL_LOG` wins over `level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests driving run() twice) keeps the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_tracing(&cfg.log_level);

    let ctx = Context::from_cli(&cli, cfg)?;
    dispatch(&cli, &ctx)
}

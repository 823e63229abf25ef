use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory and file (not in test mode), then the
/// database with every migration applied.
pub fn handle(cli: &Cli, ctx: &Context) -> AppResult<()> {
    if ctx.demo {
        warning("Nothing to initialize in demo mode.");
        return Ok(());
    }

    info("Initializing catercal…");

    let db_path = Config::init_all(cli.db.as_deref(), ctx.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    let pool = DbPool::open(&db_str)?;

    ttlog_quiet(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {db_str}"),
    );

    success(format!("Database initialized at {db_str}"));
    Ok(())
}

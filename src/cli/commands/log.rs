use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if ctx.demo {
            warning("Demo mode keeps no log.");
            return Ok(());
        }
        let pool = DbPool::open(&ctx.cfg.database)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}

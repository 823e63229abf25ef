use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        if ctx.demo {
            warning("Demo mode has no database to back up.");
            return Ok(());
        }
        BackupLogic::backup(&ctx.cfg.database, file, *compress, ctx.assume_yes)?;
    }

    Ok(())
}

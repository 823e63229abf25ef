use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::{export_snapshot, parse_range};
use crate::store::Mirror;
use std::path::Path;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let range = range
            .as_deref()
            .filter(|r| !r.eq_ignore_ascii_case("all"))
            .map(parse_range)
            .transpose()?;

        let mut store = ctx.open_store()?;
        let mirror = Mirror::attach(store.as_mut())?;

        let written = export_snapshot(
            mirror.snapshot(),
            *what,
            *format,
            Path::new(file),
            range,
            *force || ctx.assume_yes,
        )?;
        tracing::info!("exported {written} row(s) as {}", format.as_str());
    }
    Ok(())
}

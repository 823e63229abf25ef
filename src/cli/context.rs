use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{MemoryStore, RecordStore, SqliteStore};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// Settings resolved once per invocation and shared by every handler.
pub struct Context {
    pub cfg: Config,
    pub today: NaiveDate,
    pub demo: bool,
    pub assume_yes: bool,
    pub test: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli, cfg: Config) -> AppResult<Self> {
        Ok(Self {
            cfg,
            today: date::resolve_today(cli.today.as_deref())?,
            demo: cli.demo,
            assume_yes: cli.yes,
            test: cli.test,
        })
    }

    /// The record store for this run: sample data with `--demo`, else the
    /// configured database.
    pub fn open_store(&self) -> AppResult<Box<dyn RecordStore>> {
        if self.demo {
            tracing::info!("using in-memory sample data");
            return Ok(Box::new(MemoryStore::with_sample_data(self.today)?));
        }
        tracing::info!("opening database {}", self.cfg.database);
        Ok(Box::new(SqliteStore::open(&self.cfg.database)?))
    }

    /// Reminder printed after a write that will not survive the process.
    pub fn warn_if_volatile(&self) {
        if self.demo {
            warning("Demo mode: changes are not saved.");
        }
    }

    pub fn money(&self, amount: crate::models::Money) -> String {
        crate::utils::format_currency(amount, &self.cfg.currency_symbol)
    }
}

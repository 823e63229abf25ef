use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::db::initialize::init_db;
use crate::db::migrate::{pending_migrations, run_pending_migrations_verbose};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if ctx.demo {
            warning("Demo mode has no database.");
            return Ok(());
        }

        // Opened without migrating so that --migrate can report what it does.
        let pool = DbPool::new(&ctx.cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            if pending_migrations(&pool.conn)?.is_empty() {
                info("Database schema is up to date.");
            } else {
                run_pending_migrations_verbose(&pool.conn)?;
            }
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if *show_info {
            init_db(&pool.conn)?;
            stats::print_db_info(&pool, &ctx.cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}

use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_optional};
use rusqlite::OptionalExtension;
use std::fs;

/// Row count and first/last date of one dated table.
fn table_overview(
    pool: &DbPool,
    table: &str,
) -> rusqlite::Result<(i64, Option<String>, Option<String>)> {
    let count: i64 = pool
        .conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;

    let first: Option<String> = pool
        .conn
        .query_row(
            &format!("SELECT date FROM {table} ORDER BY date ASC LIMIT 1"),
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            &format!("SELECT date FROM {table} ORDER BY date DESC LIMIT 1"),
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok((count, first, last))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    for table in ["events", "receipts"] {
        let (count, first, last) = table_overview(pool, table)?;

        let fmt_first = colorize_optional(first.as_deref().unwrap_or("--"));
        let fmt_last = colorize_optional(last.as_deref().unwrap_or("--"));

        println!(
            "{}• Total {}:{} {}{}{}",
            CYAN, table, RESET, GREEN, count, RESET
        );
        println!("    from: {}", fmt_first);
        println!("    to:   {}", fmt_last);
    }

    println!();
    Ok(())
}

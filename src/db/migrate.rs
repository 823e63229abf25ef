use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step applied at most once, recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250701_0001_create_events",
        description: "Created events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS events (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            title                 TEXT NOT NULL DEFAULT '',
            date                  TEXT NOT NULL,
            estimated_revenue     TEXT NOT NULL DEFAULT '0',
            estimated_food_cost   TEXT NOT NULL DEFAULT '0',
            estimated_labor_cost  TEXT NOT NULL DEFAULT '0',
            actual_revenue        TEXT NOT NULL DEFAULT '0',
            actual_food_cost      TEXT NOT NULL DEFAULT '0',
            actual_labor_cost     TEXT NOT NULL DEFAULT '0',
            status                TEXT NOT NULL DEFAULT 'pending'
                                  CHECK(status IN ('pending','confirmed','completed','cancelled')),
            notes                 TEXT NOT NULL DEFAULT '',
            lists                 TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        "#,
    },
    Migration {
        version: "20250701_0002_create_receipts",
        description: "Created receipts table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS receipts (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            store  TEXT NOT NULL DEFAULT '',
            total  TEXT NOT NULL DEFAULT '0',
            date   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_receipts_date ON receipts(date);
        "#,
    },
    Migration {
        version: "20250715_0003_event_repeat_columns",
        description: "Added repeat / repeat_until to events",
        sql: r#"
        ALTER TABLE events ADD COLUMN repeat TEXT NOT NULL DEFAULT 'none'
            CHECK(repeat IN ('none','weekly','biweekly','monthly'));
        ALTER TABLE events ADD COLUMN repeat_until TEXT;
        "#,
    },
];

/// Ensure that the `log` table exists. It also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute_batch(&format!("BEGIN;\n{}\nCOMMIT;", m.sql))
        .inspect_err(|_| {
            let _ = conn.execute_batch("ROLLBACK;");
        })?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tracing::debug!("migration applied: {}", m.version);
    Ok(())
}

/// Names of the migrations not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, in order.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied += 1;
    }

    if applied > 0 {
        tracing::info!("{applied} migration(s) applied");
    }

    Ok(())
}

/// Verbose variant used by `db --migrate`.
pub fn run_pending_migrations_verbose(conn: &Connection) -> Result<()> {
    let pending = pending_migrations(conn)?;
    run_pending_migrations(conn)?;
    for version in &pending {
        success(format!("Migration applied: {version}"));
    }
    Ok(())
}

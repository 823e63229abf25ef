use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventStatus, Money, Receipt, RecordId, RepeatPolicy};
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};
use std::str::FromStr;

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_date(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(raw.clone())))
}

fn get_money(row: &Row, col: &str) -> Result<Money> {
    let raw: String = row.get(col)?;
    Money::from_str(raw.trim()).map_err(|_| {
        conversion_error(
            0,
            AppError::CorruptRecord(format!("column {col} is not a decimal: {raw}")),
        )
    })
}

fn money_str(m: &Money) -> String {
    m.to_string()
}

fn date_str(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

// ---------------------------
// events
// ---------------------------

pub fn map_event_row(row: &Row) -> Result<Event> {
    let status_str: String = row.get("status")?;
    let status = EventStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(status_str.clone())))?;

    let repeat_str: String = row.get("repeat")?;
    let repeat = RepeatPolicy::from_db_str(&repeat_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidRepeat(repeat_str.clone())))?;

    let repeat_until = match row.get::<_, Option<String>>("repeat_until")? {
        Some(raw) if !raw.is_empty() => Some(
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map_err(|_| conversion_error(0, AppError::InvalidDate(raw.clone())))?,
        ),
        _ => None,
    };

    let lists_str: String = row.get("lists")?;
    let lists: Vec<String> = serde_json::from_str(&lists_str)
        .map_err(|e| conversion_error(0, AppError::CorruptRecord(format!("lists: {e}"))))?;

    Ok(Event {
        id: row.get("id")?,
        title: row.get("title")?,
        date: get_date(row, "date")?,
        estimated_revenue: get_money(row, "estimated_revenue")?,
        estimated_food_cost: get_money(row, "estimated_food_cost")?,
        estimated_labor_cost: get_money(row, "estimated_labor_cost")?,
        actual_revenue: get_money(row, "actual_revenue")?,
        actual_food_cost: get_money(row, "actual_food_cost")?,
        actual_labor_cost: get_money(row, "actual_labor_cost")?,
        status,
        notes: row.get("notes")?,
        lists,
        repeat,
        repeat_until,
    })
}

/// All events, oldest first (id breaks ties so insertion order is kept).
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare("SELECT * FROM events ORDER BY date ASC, id ASC")?;
    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<RecordId> {
    let lists = serde_json::to_string(&ev.lists)?;
    conn.execute(
        "INSERT INTO events (title, date, estimated_revenue, estimated_food_cost, estimated_labor_cost,
                             actual_revenue, actual_food_cost, actual_labor_cost,
                             status, notes, lists, repeat, repeat_until)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            ev.title,
            date_str(&ev.date),
            money_str(&ev.estimated_revenue),
            money_str(&ev.estimated_food_cost),
            money_str(&ev.estimated_labor_cost),
            money_str(&ev.actual_revenue),
            money_str(&ev.actual_food_cost),
            money_str(&ev.actual_labor_cost),
            ev.status.to_db_str(),
            ev.notes,
            lists,
            ev.repeat.to_db_str(),
            ev.repeat_until.as_ref().map(date_str),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace every field of event `id`. Returns false if no row matched.
pub fn update_event(conn: &Connection, id: RecordId, ev: &Event) -> AppResult<bool> {
    let lists = serde_json::to_string(&ev.lists)?;
    let changed = conn.execute(
        "UPDATE events
         SET title = ?1, date = ?2,
             estimated_revenue = ?3, estimated_food_cost = ?4, estimated_labor_cost = ?5,
             actual_revenue = ?6, actual_food_cost = ?7, actual_labor_cost = ?8,
             status = ?9, notes = ?10, lists = ?11, repeat = ?12, repeat_until = ?13
         WHERE id = ?14",
        params![
            ev.title,
            date_str(&ev.date),
            money_str(&ev.estimated_revenue),
            money_str(&ev.estimated_food_cost),
            money_str(&ev.estimated_labor_cost),
            money_str(&ev.actual_revenue),
            money_str(&ev.actual_food_cost),
            money_str(&ev.actual_labor_cost),
            ev.status.to_db_str(),
            ev.notes,
            lists,
            ev.repeat.to_db_str(),
            ev.repeat_until.as_ref().map(date_str),
            id,
        ],
    )?;
    Ok(changed > 0)
}

pub fn delete_event(conn: &Connection, id: RecordId) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

// ---------------------------
// receipts
// ---------------------------

pub fn map_receipt_row(row: &Row) -> Result<Receipt> {
    Ok(Receipt {
        id: row.get("id")?,
        store: row.get("store")?,
        total: get_money(row, "total")?,
        date: get_date(row, "date")?,
    })
}

pub fn load_receipts(conn: &Connection) -> AppResult<Vec<Receipt>> {
    let mut stmt = conn.prepare("SELECT * FROM receipts ORDER BY date ASC, id ASC")?;
    let rows = stmt.query_map([], map_receipt_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_receipt(conn: &Connection, r: &Receipt) -> AppResult<RecordId> {
    conn.execute(
        "INSERT INTO receipts (store, total, date) VALUES (?1, ?2, ?3)",
        params![r.store, money_str(&r.total), date_str(&r.date)],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_receipt(conn: &Connection, id: RecordId, r: &Receipt) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE receipts SET store = ?1, total = ?2, date = ?3 WHERE id = ?4",
        params![r.store, money_str(&r.total), date_str(&r.date), id],
    )?;
    Ok(changed > 0)
}

pub fn delete_receipt(conn: &Connection, id: RecordId) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM receipts WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

// ---------------------------
// internal log
// ---------------------------

/// One row of the internal log: (id, date, operation, target, message).
pub type LogRow = (i64, String, String, String, String);

pub fn load_log(conn: &Connection) -> Result<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out: Vec<LogRow> = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

//! Unified application error type.
//! Every module (store, db, core, cli, export) returns AppError so that
//! failures surface the same way at the command line.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored record is corrupted: {0}")]
    CorruptRecord(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid event status: {0} (use pending, confirmed, completed or cancelled)")]
    InvalidStatus(String),

    #[error("Invalid repeat policy: {0} (use none, weekly, biweekly or monthly)")]
    InvalidRepeat(String),

    #[error("Invalid calendar view: {0} (use monthly, 3month or annual)")]
    InvalidView(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("No {collection} record with id {id}")]
    NotFound { collection: &'static str, id: i64 },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

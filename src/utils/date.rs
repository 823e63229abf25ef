use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `--today` when given, else the local date.
pub fn resolve_today(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

/// `YYYY-MM` argument, or the month containing `fallback`.
pub fn resolve_month(arg: Option<&str>, fallback: NaiveDate) -> AppResult<YearMonth> {
    match arg {
        Some(s) => YearMonth::parse(s).ok_or_else(|| AppError::InvalidMonth(s.to_string())),
        None => Ok(YearMonth::from_date(fallback)),
    }
}

/// Short weekday names, Sunday first, matching the calendar grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

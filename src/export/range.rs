use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use chrono::NaiveDate;

/// Inclusive date interval used to filter exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse `--range`.
///
/// Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two of the same form
/// joined by `:` (e.g. `2025-06:2025-08`).
pub fn parse_range(r: &str) -> AppResult<DateRange> {
    let r = r.trim();
    let (start, end) = match r.split_once(':') {
        Some((a, b)) => {
            let (a, b) = (a.trim(), b.trim());
            if a.len() != b.len() {
                return Err(AppError::InvalidDate(format!(
                    "{r} (start and end must have the same format)"
                )));
            }
            (bounds(a)?.0, bounds(b)?.1)
        }
        None => bounds(r)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!("{r} (start is after end)")));
    }
    Ok(DateRange { start, end })
}

/// First and last day covered by a single period expression.
fn bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| AppError::InvalidDate(p.into()))?;
            let first = YearMonth::new(y, 1).ok_or_else(|| AppError::InvalidDate(p.into()))?;
            let last = YearMonth::new(y, 12).ok_or_else(|| AppError::InvalidDate(p.into()))?;
            Ok((first.first_day(), last.last_day()))
        }
        7 => {
            let ym = YearMonth::parse(p).ok_or_else(|| AppError::InvalidMonth(p.into()))?;
            Ok((ym.first_day(), ym.last_day()))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(p.into()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!("{p} (unsupported range format)"))),
    }
}

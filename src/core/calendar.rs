//! Calendar partitioning: a 42-day month grid, a three-month strip and a
//! twelve-month year, each bucket holding the events that fall in it.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, YearMonth};
use chrono::{Datelike, Duration, Months, NaiveDate};

/// Cells in a monthly grid: six full weeks.
pub const GRID_DAYS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Monthly,
    ThreeMonth,
    Annual,
}

impl Granularity {
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Granularity::Monthly),
            "3month" | "three-month" | "quarter" | "q" => Ok(Granularity::ThreeMonth),
            "annual" | "year" | "y" => Ok(Granularity::Annual),
            _ => Err(AppError::InvalidView(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Granularity::Monthly => "monthly",
            Granularity::ThreeMonth => "3month",
            Granularity::Annual => "annual",
        }
    }

    /// Move the reference date one page forward (`forward`) or back:
    /// one month, three months or one year. Day of month is clamped.
    pub fn step(&self, reference: NaiveDate, forward: bool) -> NaiveDate {
        let months = match self {
            Granularity::Monthly => 1,
            Granularity::ThreeMonth => 3,
            Granularity::Annual => 12,
        };
        let moved = if forward {
            reference.checked_add_months(Months::new(months))
        } else {
            reference.checked_sub_months(Months::new(months))
        };
        moved.unwrap_or(reference)
    }
}

/// Identity of a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSpan {
    Day(NaiveDate),
    Month(YearMonth),
}

impl BucketSpan {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            BucketSpan::Day(d) => *d == date,
            BucketSpan::Month(m) => m.contains(date),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarBucket<'a> {
    pub span: BucketSpan,
    /// False for the leading / trailing days of adjacent months in a grid,
    /// and for the neighbouring months of a three-month strip.
    pub is_current: bool,
    pub is_today: bool,
    /// Events of this bucket, in snapshot order.
    pub events: Vec<&'a Event>,
}

/// Sunday on or before the first day of `month`.
pub fn grid_start(month: YearMonth) -> NaiveDate {
    let first = month.first_day();
    first - Duration::days(i64::from(first.weekday().num_days_from_sunday()))
}

pub fn calendar_buckets<'a>(
    events: &'a [Event],
    reference: NaiveDate,
    today: NaiveDate,
    granularity: Granularity,
) -> Vec<CalendarBucket<'a>> {
    let current = YearMonth::from_date(reference);

    match granularity {
        Granularity::Monthly => {
            let start = grid_start(current);
            start
                .iter_days()
                .take(GRID_DAYS)
                .map(|day| CalendarBucket {
                    span: BucketSpan::Day(day),
                    is_current: current.contains(day),
                    is_today: day == today,
                    events: events_in(events, BucketSpan::Day(day)),
                })
                .collect()
        }
        Granularity::ThreeMonth => (-1..=1)
            .map(|offset| {
                let month = current.offset(offset);
                month_bucket(events, month, month == current, today)
            })
            .collect(),
        Granularity::Annual => (1..=12)
            .filter_map(|m| YearMonth::new(reference.year(), m))
            .map(|month| month_bucket(events, month, true, today))
            .collect(),
    }
}

fn month_bucket<'a>(
    events: &'a [Event],
    month: YearMonth,
    is_current: bool,
    today: NaiveDate,
) -> CalendarBucket<'a> {
    let span = BucketSpan::Month(month);
    CalendarBucket {
        span,
        is_current,
        is_today: month.contains(today),
        events: events_in(events, span),
    }
}

fn events_in(events: &[Event], span: BucketSpan) -> Vec<&Event> {
    events.iter().filter(|ev| span.contains(ev.date)).collect()
}

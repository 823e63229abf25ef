//! Domain logic. Form validation, aggregation, calendar partitioning and
//! recurrence expansion are pure and never touch the record store; `backup`
//! and `log` are the file and log-table helpers behind their commands.

pub mod aggregate;
pub mod backup;
pub mod calendar;
pub mod form;
pub mod log;
pub mod recurrence;
pub mod summary;

pub use aggregate::{
    DEFAULT_UPCOMING_LIMIT, FutureTotals, future_year_totals, monthly_food_spending,
    monthly_receipts, upcoming_events,
};
pub use calendar::{BucketSpan, CalendarBucket, Granularity, calendar_buckets};
pub use recurrence::expand;
pub use summary::FinancialSummary;

//! Financial queries over an event / receipt snapshot.
//!
//! All functions are pure and recompute from the full slices they receive.

use crate::models::{Event, Money, Receipt, YearMonth};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

/// Number of upcoming events shown when no limit is configured.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Revenue and costs still ahead in the reference year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FutureTotals {
    pub revenue: Money,
    pub food_cost: Money,
    pub labor_cost: Money,
}

// Sums saturate at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
impl FutureTotals {
    pub fn cost_of_goods(&self) -> Money {
        self.food_cost.saturating_add(self.labor_cost)
    }

    pub fn gross_margin(&self) -> Money {
        self.revenue.saturating_sub(self.cost_of_goods())
    }
}

/// Sum revenue, food cost and labor cost over the events dated from
/// `reference` (inclusive) to the end of its year.
///
/// Each quantity falls back to its estimate independently when the actual
/// figure is zero.
pub fn future_year_totals(events: &[Event], reference: NaiveDate) -> FutureTotals {
    events
        .iter()
        .filter(|ev| ev.date.year() == reference.year() && ev.date >= reference)
        .fold(FutureTotals::default(), |mut acc, ev| {
            acc.revenue = acc.revenue.saturating_add(ev.effective_revenue());
            acc.food_cost = acc.food_cost.saturating_add(ev.effective_food_cost());
            acc.labor_cost = acc.labor_cost.saturating_add(ev.effective_labor_cost());
            acc
        })
}

/// Total spent on receipts dated inside `month`.
pub fn monthly_food_spending(receipts: &[Receipt], month: YearMonth) -> Money {
    receipts
        .iter()
        .filter(|r| month.contains(r.date))
        .fold(Decimal::ZERO, |sum, r| sum.saturating_add(r.total))
}

/// Receipts of `month`, newest first. Same-day receipts keep input order.
pub fn monthly_receipts(receipts: &[Receipt], month: YearMonth) -> Vec<&Receipt> {
    let mut out: Vec<&Receipt> = receipts.iter().filter(|r| month.contains(r.date)).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// The next `limit` events on or after `reference`, soonest first.
/// Same-day events keep input order.
pub fn upcoming_events(events: &[Event], reference: NaiveDate, limit: usize) -> Vec<&Event> {
    let mut out: Vec<&Event> = events.iter().filter(|ev| ev.date >= reference).collect();
    out.sort_by_key(|ev| ev.date);
    out.truncate(limit);
    out
}

use crate::core::aggregate::{
    FutureTotals, future_year_totals, monthly_food_spending, monthly_receipts, upcoming_events,
};
use crate::models::{Event, Money, Receipt, Snapshot, YearMonth};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything the financial dashboard shows, computed in one pass over a
/// snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary<'a> {
    pub reference: NaiveDate,
    pub totals: FutureTotals,
    pub spending_month: YearMonth,
    pub monthly_spending: Money,
    pub receipts: Vec<&'a Receipt>,
    pub upcoming: Vec<&'a Event>,
}

impl<'a> FinancialSummary<'a> {
    pub fn build(
        snapshot: &'a Snapshot,
        reference: NaiveDate,
        spending_month: YearMonth,
        upcoming_limit: usize,
    ) -> Self {
        Self {
            reference,
            totals: future_year_totals(&snapshot.events, reference),
            spending_month,
            monthly_spending: monthly_food_spending(&snapshot.receipts, spending_month),
            receipts: monthly_receipts(&snapshot.receipts, spending_month),
            upcoming: upcoming_events(&snapshot.events, reference, upcoming_limit),
        }
    }

    pub fn cost_of_goods(&self) -> Money {
        self.totals.cost_of_goods()
    }

    pub fn gross_margin(&self) -> Money {
        self.totals.gross_margin()
    }
}

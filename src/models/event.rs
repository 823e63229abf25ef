use super::{Money, RecordId, repeat::RepeatPolicy, status::EventStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// 0 until the store assigns one.
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub estimated_revenue: Money,
    pub estimated_food_cost: Money,
    pub estimated_labor_cost: Money,
    pub actual_revenue: Money,
    pub actual_food_cost: Money,
    pub actual_labor_cost: Money,
    pub status: EventStatus,
    pub notes: String,
    pub lists: Vec<String>,
    pub repeat: RepeatPolicy,
    pub repeat_until: Option<NaiveDate>,
}

impl Event {
    /// A pending, non-repeating event with every amount at zero.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: 0,
            title: title.into(),
            date,
            estimated_revenue: Decimal::ZERO,
            estimated_food_cost: Decimal::ZERO,
            estimated_labor_cost: Decimal::ZERO,
            actual_revenue: Decimal::ZERO,
            actual_food_cost: Decimal::ZERO,
            actual_labor_cost: Decimal::ZERO,
            status: EventStatus::Pending,
            notes: String::new(),
            lists: Vec::new(),
            repeat: RepeatPolicy::None,
            repeat_until: None,
        }
    }

    pub fn with_estimates(mut self, revenue: Money, food: Money, labor: Money) -> Self {
        self.estimated_revenue = revenue;
        self.estimated_food_cost = food;
        self.estimated_labor_cost = labor;
        self
    }

    pub fn with_actuals(mut self, revenue: Money, food: Money, labor: Money) -> Self {
        self.actual_revenue = revenue;
        self.actual_food_cost = food;
        self.actual_labor_cost = labor;
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatPolicy, until: Option<NaiveDate>) -> Self {
        self.repeat = repeat;
        self.repeat_until = until;
        self
    }

    // A recorded zero counts as "not recorded": the estimate is used instead.

    pub fn effective_revenue(&self) -> Money {
        prefer_actual(self.actual_revenue, self.estimated_revenue)
    }

    pub fn effective_food_cost(&self) -> Money {
        prefer_actual(self.actual_food_cost, self.estimated_food_cost)
    }

    pub fn effective_labor_cost(&self) -> Money {
        prefer_actual(self.actual_labor_cost, self.estimated_labor_cost)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

fn prefer_actual(actual: Money, estimated: Money) -> Money {
    if actual.is_zero() { estimated } else { actual }
}

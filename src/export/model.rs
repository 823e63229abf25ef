use crate::models::{Event, Receipt};
use serde::Serialize;

/// A flat, string-friendly row shared by every export format.
pub trait ExportRow: Serialize {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub status: String,
    pub estimated_revenue: String,
    pub estimated_food_cost: String,
    pub estimated_labor_cost: String,
    pub actual_revenue: String,
    pub actual_food_cost: String,
    pub actual_labor_cost: String,
    pub notes: String,
    pub lists: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id,
            date: ev.date_str(),
            title: ev.title.clone(),
            status: ev.status.to_db_str().to_string(),
            estimated_revenue: ev.estimated_revenue.to_string(),
            estimated_food_cost: ev.estimated_food_cost.to_string(),
            estimated_labor_cost: ev.estimated_labor_cost.to_string(),
            actual_revenue: ev.actual_revenue.to_string(),
            actual_food_cost: ev.actual_food_cost.to_string(),
            actual_labor_cost: ev.actual_labor_cost.to_string(),
            notes: ev.notes.clone(),
            lists: ev.lists.join("; "),
        }
    }
}

impl ExportRow for EventExport {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "date",
            "title",
            "status",
            "estimated_revenue",
            "estimated_food_cost",
            "estimated_labor_cost",
            "actual_revenue",
            "actual_food_cost",
            "actual_labor_cost",
            "notes",
            "lists",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.title.clone(),
            self.status.clone(),
            self.estimated_revenue.clone(),
            self.estimated_food_cost.clone(),
            self.estimated_labor_cost.clone(),
            self.actual_revenue.clone(),
            self.actual_food_cost.clone(),
            self.actual_labor_cost.clone(),
            self.notes.clone(),
            self.lists.clone(),
        ]
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ReceiptExport {
    pub id: i64,
    pub date: String,
    pub store: String,
    pub total: String,
}

impl From<&Receipt> for ReceiptExport {
    fn from(r: &Receipt) -> Self {
        Self {
            id: r.id,
            date: r.date_str(),
            store: r.store.clone(),
            total: r.total.to_string(),
        }
    }
}

impl ExportRow for ReceiptExport {
    fn headers() -> &'static [&'static str] {
        &["id", "date", "store", "total"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.store.clone(),
            self.total.clone(),
        ]
    }
}

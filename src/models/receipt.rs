use super::{Money, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single food purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: RecordId,
    pub store: String,
    pub total: Money,
    pub date: NaiveDate,
}

impl Receipt {
    pub fn new(store: impl Into<String>, total: Money, date: NaiveDate) -> Self {
        Self {
            id: 0,
            store: store.into(),
            total,
            date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

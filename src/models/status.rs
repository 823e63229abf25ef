use serde::{Deserialize, Serialize};

/// Booking state of a catering event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Convert user input (any case) → enum
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EventStatus::Pending),
            "confirmed" => Some(EventStatus::Confirmed),
            "completed" => Some(EventStatus::Completed),
            "cancelled" => Some(EventStatus::Cancelled),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

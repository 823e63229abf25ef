use serde::{Deserialize, Serialize};

/// Repetition requested when an event is created.
///
/// The policy only drives expansion at creation time: every expanded
/// instance is stored with `RepeatPolicy::None` and no link back to its
/// siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPolicy {
    #[default]
    None,
    Weekly,
    Biweekly,
    Monthly,
}

impl RepeatPolicy {
    pub fn from_code(code: &str) -> Option<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(RepeatPolicy::None),
            "weekly" => Some(RepeatPolicy::Weekly),
            "biweekly" => Some(RepeatPolicy::Biweekly),
            "monthly" => Some(RepeatPolicy::Monthly),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            RepeatPolicy::None => "none",
            RepeatPolicy::Weekly => "weekly",
            RepeatPolicy::Biweekly => "biweekly",
            RepeatPolicy::Monthly => "monthly",
        }
    }
}

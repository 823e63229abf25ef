pub mod event;
pub mod month;
pub mod receipt;
pub mod repeat;
pub mod snapshot;
pub mod status;

pub use event::Event;
pub use month::YearMonth;
pub use receipt::Receipt;
pub use repeat::RepeatPolicy;
pub use snapshot::Snapshot;
pub use status::EventStatus;

/// Identifier assigned by the record store; `0` means "not stored yet".
pub type RecordId = i64;

/// Monetary amounts are exact decimals.
pub type Money = rust_decimal::Decimal;

use super::{event::Event, receipt::Receipt};

/// Point-in-time copy of both collections.
///
/// Every query in `core` takes its input from a snapshot, never from the
/// store directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub receipts: Vec<Receipt>,
}

impl Snapshot {
    pub fn new(events: Vec<Event>, receipts: Vec<Receipt>) -> Self {
        Self { events, receipts }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.receipts.is_empty()
    }
}

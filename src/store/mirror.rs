use super::{Collection, CollectionSnapshot, RecordStore};
use crate::errors::AppResult;
use crate::models::Snapshot;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Local copy of both collections, kept current by the store's
/// subscription feed.
///
/// The mirror is a read-through cache: writes always go to the store, and
/// the mirror only learns about them on the next [`Mirror::refresh`].
pub struct Mirror {
    events_rx: Receiver<CollectionSnapshot>,
    receipts_rx: Receiver<CollectionSnapshot>,
    current: Snapshot,
}

impl Mirror {
    /// Subscribe to both collections of `store` and load their current
    /// contents.
    pub fn attach<S: RecordStore + ?Sized>(store: &mut S) -> AppResult<Self> {
        let events_rx = store.subscribe(Collection::Events)?;
        let receipts_rx = store.subscribe(Collection::Receipts)?;

        let mut mirror = Self {
            events_rx,
            receipts_rx,
            current: Snapshot::default(),
        };
        mirror.refresh();
        Ok(mirror)
    }

    /// Apply every pending notification; only the latest one per collection
    /// matters. Returns true if anything changed.
    pub fn refresh(&mut self) -> bool {
        let mut changed = false;
        for rx in [&self.events_rx, &self.receipts_rx] {
            loop {
                match rx.try_recv() {
                    Ok(CollectionSnapshot::Events(events)) => {
                        self.current.events = events;
                        changed = true;
                    }
                    Ok(CollectionSnapshot::Receipts(receipts)) => {
                        self.current.receipts = receipts;
                        changed = true;
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        tracing::debug!("record store feed closed");
                        break;
                    }
                }
            }
        }
        changed
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }
}

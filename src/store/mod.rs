//! Record store collaborator.
//!
//! A store is the system of record for the `events` and `receipts`
//! collections. Callers never read it directly for display: they attach a
//! [`Mirror`], which is fed by the store's subscription channel and hands
//! out [`Snapshot`]s to the pure queries in `core`.

pub mod memory;
pub mod mirror;
pub mod sqlite;

pub use memory::MemoryStore;
pub use mirror::Mirror;
pub use sqlite::SqliteStore;

use crate::core::recurrence;
use crate::errors::AppResult;
use crate::models::{Event, Receipt, RecordId, Snapshot};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Receipts,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Receipts => "receipts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Full contents of one collection at the time of a change.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionSnapshot {
    Events(Vec<Event>),
    Receipts(Vec<Receipt>),
}

impl CollectionSnapshot {
    pub fn collection(&self) -> Collection {
        match self {
            CollectionSnapshot::Events(_) => Collection::Events,
            CollectionSnapshot::Receipts(_) => Collection::Receipts,
        }
    }
}

pub trait RecordStore {
    fn list_events(&self) -> AppResult<Vec<Event>>;

    fn list_receipts(&self) -> AppResult<Vec<Receipt>>;

    /// Store a new event; the `id` field of `event` is ignored.
    fn create_event(&mut self, event: &Event) -> AppResult<RecordId>;

    /// Replace event `id` with `event`. `Ok(false)` if `id` does not exist.
    fn update_event(&mut self, id: RecordId, event: &Event) -> AppResult<bool>;

    fn delete_event(&mut self, id: RecordId) -> AppResult<bool>;

    /// Create every event in `events`, or none of them. Ids come back in
    /// input order.
    ///
    /// The default creates them one by one and deletes the ones already
    /// created when a later create fails. Stores with transactions should
    /// override it.
    fn create_events(&mut self, events: &[Event]) -> AppResult<Vec<RecordId>> {
        let mut ids = Vec::with_capacity(events.len());
        for ev in events {
            match self.create_event(ev) {
                Ok(id) => ids.push(id),
                Err(e) => {
                    for id in ids.iter().rev() {
                        if let Err(undo) = self.delete_event(*id) {
                            tracing::warn!("could not undo event {id}: {undo}");
                        }
                    }
                    return Err(e);
                }
            }
        }
        Ok(ids)
    }

    fn create_receipt(&mut self, receipt: &Receipt) -> AppResult<RecordId>;

    fn update_receipt(&mut self, id: RecordId, receipt: &Receipt) -> AppResult<bool>;

    fn delete_receipt(&mut self, id: RecordId) -> AppResult<bool>;

    /// Receive the current contents of `collection` right away, then a new
    /// full copy after every change to it.
    fn subscribe(&mut self, collection: Collection) -> AppResult<Receiver<CollectionSnapshot>>;

    fn snapshot(&self) -> AppResult<Snapshot> {
        Ok(Snapshot::new(self.list_events()?, self.list_receipts()?))
    }

    fn get_event(&self, id: RecordId) -> AppResult<Option<Event>> {
        Ok(self.list_events()?.into_iter().find(|ev| ev.id == id))
    }

    fn get_receipt(&self, id: RecordId) -> AppResult<Option<Receipt>> {
        Ok(self.list_receipts()?.into_iter().find(|r| r.id == id))
    }
}

/// Expand `template` and create one record per occurrence, all or nothing.
/// Returns the assigned ids, anchor first.
pub fn persist_event<S: RecordStore + ?Sized>(
    store: &mut S,
    template: &Event,
) -> AppResult<Vec<RecordId>> {
    let instances = recurrence::expand(template);
    tracing::debug!(
        "persisting {} instance(s) of '{}' ({})",
        instances.len(),
        template.title,
        template.repeat.to_db_str()
    );

    store.create_events(&instances)
}

/// Open subscription channels, grouped by collection.
#[derive(Default)]
pub struct Subscribers {
    events: Vec<Sender<CollectionSnapshot>>,
    receipts: Vec<Sender<CollectionSnapshot>>,
}

impl Subscribers {
    fn list_mut(&mut self, collection: Collection) -> &mut Vec<Sender<CollectionSnapshot>> {
        match collection {
            Collection::Events => &mut self.events,
            Collection::Receipts => &mut self.receipts,
        }
    }

    /// Open a channel primed with `initial`.
    pub fn register(&mut self, initial: CollectionSnapshot) -> Receiver<CollectionSnapshot> {
        let (tx, rx) = mpsc::channel();
        let collection = initial.collection();
        tx.send(initial).ok();
        self.list_mut(collection).push(tx);
        rx
    }

    pub fn is_watched(&self, collection: Collection) -> bool {
        match collection {
            Collection::Events => !self.events.is_empty(),
            Collection::Receipts => !self.receipts.is_empty(),
        }
    }

    /// Deliver `snapshot` to every live subscriber; dropped receivers are
    /// forgotten.
    pub fn publish(&mut self, snapshot: CollectionSnapshot) {
        let list = self.list_mut(snapshot.collection());
        list.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}

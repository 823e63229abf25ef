use super::{Collection, CollectionSnapshot, RecordStore, Subscribers};
use crate::errors::AppResult;
use crate::models::{Event, EventStatus, Money, Receipt, RecordId};
use chrono::{Duration, NaiveDate};
use std::sync::mpsc::Receiver;

/// Volatile record store. Ids are assigned from 1 upward and never reused.
#[derive(Default)]
pub struct MemoryStore {
    events: Vec<Event>,
    receipts: Vec<Receipt>,
    next_id: RecordId,
    subscribers: Subscribers,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handful of events and receipts around `today`, used by `--demo`.
    pub fn with_sample_data(today: NaiveDate) -> AppResult<Self> {
        let mut store = Self::new();

        let day = |offset: i64| today + Duration::days(offset);

        let events = [
            Event::new("Corporate lunch", day(3))
                .with_estimates(Money::new(250000, 2), Money::new(80000, 2), Money::new(45000, 2))
                .with_status(EventStatus::Confirmed),
            Event::new("Wedding reception", day(12))
                .with_estimates(Money::new(1200000, 2), Money::new(380000, 2), Money::new(210000, 2))
                .with_status(EventStatus::Confirmed),
            Event::new("Birthday brunch", day(20))
                .with_estimates(Money::new(90000, 2), Money::new(30000, 2), Money::new(15000, 2)),
            Event::new("Charity gala", day(-6))
                .with_estimates(Money::new(400000, 2), Money::new(120000, 2), Money::new(80000, 2))
                .with_actuals(Money::new(425000, 2), Money::new(131050, 2), Money::new(78000, 2))
                .with_status(EventStatus::Completed),
        ];
        for ev in &events {
            store.create_event(ev)?;
        }

        let receipts = [
            Receipt::new("Restaurant Depot", Money::new(24567, 2), day(-4)),
            Receipt::new("Farmers market", Money::new(18943, 2), day(-2)),
            Receipt::new("Costco", Money::new(31210, 2), day(-1)),
        ];
        for r in &receipts {
            store.create_receipt(r)?;
        }

        Ok(store)
    }

    fn assign_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }

    fn notify(&mut self, collection: Collection) {
        if !self.subscribers.is_watched(collection) {
            return;
        }
        let snapshot = match collection {
            Collection::Events => CollectionSnapshot::Events(self.events.clone()),
            Collection::Receipts => CollectionSnapshot::Receipts(self.receipts.clone()),
        };
        self.subscribers.publish(snapshot);
    }
}

impl RecordStore for MemoryStore {
    fn list_events(&self) -> AppResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn list_receipts(&self) -> AppResult<Vec<Receipt>> {
        Ok(self.receipts.clone())
    }

    fn create_event(&mut self, event: &Event) -> AppResult<RecordId> {
        let id = self.assign_id();
        self.events.push(Event {
            id,
            ..event.clone()
        });
        self.notify(Collection::Events);
        Ok(id)
    }

    fn update_event(&mut self, id: RecordId, event: &Event) -> AppResult<bool> {
        let Some(slot) = self.events.iter_mut().find(|ev| ev.id == id) else {
            return Ok(false);
        };
        *slot = Event {
            id,
            ..event.clone()
        };
        self.notify(Collection::Events);
        Ok(true)
    }

    fn delete_event(&mut self, id: RecordId) -> AppResult<bool> {
        let before = self.events.len();
        self.events.retain(|ev| ev.id != id);
        if self.events.len() == before {
            return Ok(false);
        }
        self.notify(Collection::Events);
        Ok(true)
    }

    fn create_receipt(&mut self, receipt: &Receipt) -> AppResult<RecordId> {
        let id = self.assign_id();
        self.receipts.push(Receipt {
            id,
            ..receipt.clone()
        });
        self.notify(Collection::Receipts);
        Ok(id)
    }

    fn update_receipt(&mut self, id: RecordId, receipt: &Receipt) -> AppResult<bool> {
        let Some(slot) = self.receipts.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        *slot = Receipt {
            id,
            ..receipt.clone()
        };
        self.notify(Collection::Receipts);
        Ok(true)
    }

    fn delete_receipt(&mut self, id: RecordId) -> AppResult<bool> {
        let before = self.receipts.len();
        self.receipts.retain(|r| r.id != id);
        if self.receipts.len() == before {
            return Ok(false);
        }
        self.notify(Collection::Receipts);
        Ok(true)
    }

    fn subscribe(&mut self, collection: Collection) -> AppResult<Receiver<CollectionSnapshot>> {
        let initial = match collection {
            Collection::Events => CollectionSnapshot::Events(self.events.clone()),
            Collection::Receipts => CollectionSnapshot::Receipts(self.receipts.clone()),
        };
        Ok(self.subscribers.register(initial))
    }
}

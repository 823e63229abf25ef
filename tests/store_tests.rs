use catercal::db::pool::DbPool;
use catercal::errors::{AppError, AppResult};
use catercal::models::{Event, Receipt, RecordId, RepeatPolicy};
use catercal::store::{
    Collection, CollectionSnapshot, MemoryStore, Mirror, RecordStore, SqliteStore, persist_event,
};
use rust_decimal_macros::dec;
use std::io;
use std::sync::mpsc::Receiver;

mod common;
use common::{d, event_on, receipt};

fn sqlite_store() -> SqliteStore {
    SqliteStore::new(DbPool::in_memory().expect("in-memory db"))
}

/// Create / update / delete behave the same on every store.
fn exercise_crud(store: &mut dyn RecordStore) {
    let lunch = event_on("Corporate lunch", d(2025, 7, 25)).with_estimates(
        dec!(2500),
        dec!(800),
        dec!(450),
    );
    let id = store.create_event(&lunch).expect("create");
    assert!(id > 0);

    let stored = store.get_event(id).expect("get").expect("present");
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, "Corporate lunch");
    assert_eq!(stored.estimated_revenue, dec!(2500));

    let mut changed = stored.clone();
    changed.actual_revenue = dec!(2600.5);
    changed.lists = vec!["Mains".to_string()];
    assert!(store.update_event(id, &changed).expect("update"));
    let reread = store.get_event(id).expect("get").expect("present");
    assert_eq!(reread.actual_revenue, dec!(2600.5));
    assert_eq!(reread.lists, vec!["Mains"]);

    assert!(!store.update_event(id + 1000, &changed).expect("update missing"));
    assert!(!store.delete_event(id + 1000).expect("delete missing"));

    let rid = store
        .create_receipt(&receipt("A", dec!(245.67), d(2025, 7, 20)))
        .expect("create receipt");
    let updated = Receipt::new("A+", dec!(250), d(2025, 7, 21));
    assert!(store.update_receipt(rid, &updated).expect("update receipt"));
    assert_eq!(
        store.get_receipt(rid).expect("get").expect("present").store,
        "A+"
    );

    assert!(store.delete_event(id).expect("delete"));
    assert!(store.delete_receipt(rid).expect("delete receipt"));
    assert!(store.snapshot().expect("snapshot").is_empty());
}

#[test]
fn memory_store_crud() {
    exercise_crud(&mut MemoryStore::new());
}

#[test]
fn sqlite_store_crud() {
    exercise_crud(&mut sqlite_store());
}

#[test]
fn sqlite_store_keeps_exact_decimals() {
    let mut store = sqlite_store();
    store
        .create_receipt(&receipt("A", dec!(245.67), d(2025, 7, 20)))
        .expect("create");
    store
        .create_receipt(&receipt("B", dec!(189.43), d(2025, 7, 22)))
        .expect("create");

    let total: rust_decimal::Decimal = store
        .list_receipts()
        .expect("list")
        .iter()
        .map(|r| r.total)
        .sum();
    assert_eq!(total, dec!(435.10));
}

#[test]
fn subscribe_sends_current_contents_then_changes() {
    let mut store = MemoryStore::new();
    store
        .create_event(&event_on("before", d(2025, 7, 1)))
        .expect("create");

    let rx = store.subscribe(Collection::Events).expect("subscribe");
    match rx.try_recv().expect("initial snapshot") {
        CollectionSnapshot::Events(events) => assert_eq!(events.len(), 1),
        other => panic!("unexpected {other:?}"),
    }

    store
        .create_event(&event_on("after", d(2025, 7, 2)))
        .expect("create");
    match rx.try_recv().expect("change snapshot") {
        CollectionSnapshot::Events(events) => assert_eq!(events.len(), 2),
        other => panic!("unexpected {other:?}"),
    }

    // receipts changes do not reach an events subscriber
    store
        .create_receipt(&receipt("A", dec!(1), d(2025, 7, 2)))
        .expect("create");
    assert!(rx.try_recv().is_err());

    // failed updates publish nothing
    assert!(!store.delete_event(999).expect("delete"));
    assert!(rx.try_recv().is_err());
}

#[test]
fn dropped_subscriber_does_not_break_writes() {
    let mut store = sqlite_store();
    let rx = store.subscribe(Collection::Receipts).expect("subscribe");
    drop(rx);
    store
        .create_receipt(&receipt("A", dec!(1), d(2025, 7, 2)))
        .expect("write after drop");
}

#[test]
fn mirror_follows_the_store_on_refresh() {
    let mut store = sqlite_store();
    store
        .create_event(&event_on("first", d(2025, 7, 1)))
        .expect("create");

    let mut mirror = Mirror::attach(&mut store).expect("attach");
    assert_eq!(mirror.snapshot().events.len(), 1);
    assert!(mirror.snapshot().receipts.is_empty());

    store
        .create_receipt(&receipt("A", dec!(10), d(2025, 7, 3)))
        .expect("create");
    store
        .create_event(&event_on("second", d(2025, 7, 2)))
        .expect("create");

    // not visible until refresh
    assert_eq!(mirror.snapshot().events.len(), 1);

    assert!(mirror.refresh());
    assert_eq!(mirror.snapshot().events.len(), 2);
    assert_eq!(mirror.snapshot().receipts.len(), 1);
    assert!(!mirror.refresh());
}

#[test]
fn persist_event_creates_one_record_per_occurrence() {
    let mut store = MemoryStore::new();
    let template = event_on("Weekly tasting", d(2025, 7, 1))
        .with_repeat(RepeatPolicy::Weekly, Some(d(2025, 7, 15)));

    let ids = persist_event(&mut store, &template).expect("persist");
    assert_eq!(ids.len(), 3);

    let events = store.list_events().expect("list");
    let dates: Vec<_> = events.iter().map(|e| e.date_str()).collect();
    assert_eq!(dates, vec!["2025-07-01", "2025-07-08", "2025-07-15"]);
    assert!(events.iter().all(|e| e.repeat == RepeatPolicy::None));
    assert!(events.iter().all(|e| e.repeat_until.is_none()));
}

#[test]
fn persist_event_into_sqlite_orders_by_date() {
    let mut store = sqlite_store();
    store
        .create_event(&event_on("mid", d(2025, 2, 10)))
        .expect("create");
    let template = event_on("Month end", d(2025, 1, 31))
        .with_repeat(RepeatPolicy::Monthly, Some(d(2025, 4, 30)));
    persist_event(&mut store, &template).expect("persist");

    let dates: Vec<_> = store
        .list_events()
        .expect("list")
        .iter()
        .map(|e| e.date_str())
        .collect();
    assert_eq!(
        dates,
        vec!["2025-01-31", "2025-02-10", "2025-02-28", "2025-03-31", "2025-04-30"]
    );
}

/// Memory store whose `fail_on`-th event create (1-based) errors.
struct FailingStore {
    inner: MemoryStore,
    creates: usize,
    fail_on: usize,
}

impl FailingStore {
    fn new(fail_on: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            creates: 0,
            fail_on,
        }
    }
}

impl RecordStore for FailingStore {
    fn list_events(&self) -> AppResult<Vec<Event>> {
        self.inner.list_events()
    }

    fn list_receipts(&self) -> AppResult<Vec<Receipt>> {
        self.inner.list_receipts()
    }

    fn create_event(&mut self, event: &Event) -> AppResult<RecordId> {
        self.creates += 1;
        if self.creates == self.fail_on {
            return Err(AppError::Io(io::Error::other("disk full")));
        }
        self.inner.create_event(event)
    }

    fn update_event(&mut self, id: RecordId, event: &Event) -> AppResult<bool> {
        self.inner.update_event(id, event)
    }

    fn delete_event(&mut self, id: RecordId) -> AppResult<bool> {
        self.inner.delete_event(id)
    }

    fn create_receipt(&mut self, receipt: &Receipt) -> AppResult<RecordId> {
        self.inner.create_receipt(receipt)
    }

    fn update_receipt(&mut self, id: RecordId, receipt: &Receipt) -> AppResult<bool> {
        self.inner.update_receipt(id, receipt)
    }

    fn delete_receipt(&mut self, id: RecordId) -> AppResult<bool> {
        self.inner.delete_receipt(id)
    }

    fn subscribe(&mut self, collection: Collection) -> AppResult<Receiver<CollectionSnapshot>> {
        self.inner.subscribe(collection)
    }
}

fn last_event_count(rx: &Receiver<CollectionSnapshot>) -> Option<usize> {
    rx.try_iter()
        .filter_map(|s| match s {
            CollectionSnapshot::Events(events) => Some(events.len()),
            CollectionSnapshot::Receipts(_) => None,
        })
        .last()
}

#[test]
fn failed_series_leaves_no_instances_behind() {
    let mut store = FailingStore::new(3);
    let rx = store.subscribe(Collection::Events).expect("subscribe");

    let template = event_on("Weekly tasting", d(2025, 7, 1))
        .with_repeat(RepeatPolicy::Weekly, Some(d(2025, 7, 29)));
    let err = persist_event(&mut store, &template).expect_err("third create fails");
    assert!(matches!(err, AppError::Io(_)));

    assert!(store.list_events().expect("list").is_empty());
    assert_eq!(last_event_count(&rx), Some(0));
}

#[test]
fn failed_series_in_sqlite_is_rolled_back() {
    let pool = DbPool::in_memory().expect("in-memory db");
    pool.conn
        .execute_batch(
            "CREATE TRIGGER block_day BEFORE INSERT ON events
             WHEN NEW.date = '2025-07-15'
             BEGIN SELECT RAISE(ABORT, 'day is blocked'); END;",
        )
        .expect("trigger");
    let mut store = SqliteStore::new(pool);
    store
        .create_event(&event_on("existing", d(2025, 6, 1)))
        .expect("create");
    let rx = store.subscribe(Collection::Events).expect("subscribe");

    let template = event_on("Weekly tasting", d(2025, 7, 1))
        .with_repeat(RepeatPolicy::Weekly, Some(d(2025, 7, 29)));
    assert!(persist_event(&mut store, &template).is_err());

    let titles: Vec<_> = store
        .list_events()
        .expect("list")
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["existing"]);
    // only the initial snapshot was sent
    assert_eq!(last_event_count(&rx), Some(1));
    assert!(rx.try_recv().is_err());

    // the store stays usable after the rollback
    store
        .create_event(&event_on("after", d(2025, 7, 2)))
        .expect("create after rollback");
}

#[test]
fn sqlite_series_is_published_once() {
    let mut store = sqlite_store();
    let rx = store.subscribe(Collection::Events).expect("subscribe");
    rx.try_recv().expect("initial snapshot");

    let template = event_on("Weekly tasting", d(2025, 7, 1))
        .with_repeat(RepeatPolicy::Weekly, Some(d(2025, 7, 15)));
    let ids = persist_event(&mut store, &template).expect("persist");
    assert_eq!(ids.len(), 3);

    let snapshots: Vec<_> = rx.try_iter().collect();
    assert_eq!(snapshots.len(), 1);
    assert!(matches!(&snapshots[0], CollectionSnapshot::Events(events) if events.len() == 3));
}

#[test]
fn sample_data_is_anchored_on_today() {
    let today = d(2025, 7, 1);
    let store = MemoryStore::with_sample_data(today).expect("sample data");
    let snapshot = store.snapshot().expect("snapshot");

    assert!(!snapshot.events.is_empty());
    assert!(!snapshot.receipts.is_empty());
    assert!(snapshot.events.iter().any(|e| e.date >= today));
}

use super::{Collection, CollectionSnapshot, RecordStore, Subscribers};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Event, Receipt, RecordId};
use std::sync::mpsc::Receiver;

/// Record store backed by the SQLite database file.
pub struct SqliteStore {
    pool: DbPool,
    subscribers: Subscribers,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            subscribers: Subscribers::default(),
        }
    }

    /// Open `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open(path)?))
    }

    fn collection_snapshot(&self, collection: Collection) -> AppResult<CollectionSnapshot> {
        Ok(match collection {
            Collection::Events => CollectionSnapshot::Events(self.list_events()?),
            Collection::Receipts => CollectionSnapshot::Receipts(self.list_receipts()?),
        })
    }

    /// Push the new contents of `collection` to its subscribers.
    fn notify(&mut self, collection: Collection) -> AppResult<()> {
        if self.subscribers.is_watched(collection) {
            let snapshot = self.collection_snapshot(collection)?;
            self.subscribers.publish(snapshot);
        }
        Ok(())
    }
}

impl RecordStore for SqliteStore {
    fn list_events(&self) -> AppResult<Vec<Event>> {
        queries::load_events(&self.pool.conn)
    }

    fn list_receipts(&self) -> AppResult<Vec<Receipt>> {
        queries::load_receipts(&self.pool.conn)
    }

    fn create_event(&mut self, event: &Event) -> AppResult<RecordId> {
        let id = queries::insert_event(&self.pool.conn, event)?;
        tracing::debug!("event {id} created for {}", event.date_str());
        ttlog_quiet(
            &self.pool.conn,
            "add",
            &format!("event:{id}"),
            &format!("{} on {}", event.title, event.date_str()),
        );
        self.notify(Collection::Events)?;
        Ok(id)
    }

    fn create_events(&mut self, events: &[Event]) -> AppResult<Vec<RecordId>> {
        let tx = self.pool.conn.transaction()?;

        let mut ids = Vec::with_capacity(events.len());
        for ev in events {
            let id = queries::insert_event(&tx, ev)?;
            ttlog_quiet(
                &tx,
                "add",
                &format!("event:{id}"),
                &format!("{} on {}", ev.title, ev.date_str()),
            );
            ids.push(id);
        }

        tx.commit()?;
        tracing::debug!("{} event(s) created in one transaction", ids.len());
        self.notify(Collection::Events)?;
        Ok(ids)
    }

    fn update_event(&mut self, id: RecordId, event: &Event) -> AppResult<bool> {
        if !queries::update_event(&self.pool.conn, id, event)? {
            return Ok(false);
        }
        tracing::debug!("event {id} updated");
        ttlog_quiet(
            &self.pool.conn,
            "edit",
            &format!("event:{id}"),
            &format!("{} on {}", event.title, event.date_str()),
        );
        self.notify(Collection::Events)?;
        Ok(true)
    }

    fn delete_event(&mut self, id: RecordId) -> AppResult<bool> {
        if !queries::delete_event(&self.pool.conn, id)? {
            return Ok(false);
        }
        tracing::debug!("event {id} deleted");
        ttlog_quiet(&self.pool.conn, "del", &format!("event:{id}"), "Deleted event");
        self.notify(Collection::Events)?;
        Ok(true)
    }

    fn create_receipt(&mut self, receipt: &Receipt) -> AppResult<RecordId> {
        let id = queries::insert_receipt(&self.pool.conn, receipt)?;
        tracing::debug!("receipt {id} created for {}", receipt.date_str());
        ttlog_quiet(
            &self.pool.conn,
            "add",
            &format!("receipt:{id}"),
            &format!("{} {} on {}", receipt.store, receipt.total, receipt.date_str()),
        );
        self.notify(Collection::Receipts)?;
        Ok(id)
    }

    fn update_receipt(&mut self, id: RecordId, receipt: &Receipt) -> AppResult<bool> {
        if !queries::update_receipt(&self.pool.conn, id, receipt)? {
            return Ok(false);
        }
        tracing::debug!("receipt {id} updated");
        ttlog_quiet(
            &self.pool.conn,
            "edit",
            &format!("receipt:{id}"),
            &format!("{} {} on {}", receipt.store, receipt.total, receipt.date_str()),
        );
        self.notify(Collection::Receipts)?;
        Ok(true)
    }

    fn delete_receipt(&mut self, id: RecordId) -> AppResult<bool> {
        if !queries::delete_receipt(&self.pool.conn, id)? {
            return Ok(false);
        }
        tracing::debug!("receipt {id} deleted");
        ttlog_quiet(&self.pool.conn, "del", &format!("receipt:{id}"), "Deleted receipt");
        self.notify(Collection::Receipts)?;
        Ok(true)
    }

    fn subscribe(&mut self, collection: Collection) -> AppResult<Receiver<CollectionSnapshot>> {
        let initial = self.collection_snapshot(collection)?;
        Ok(self.subscribers.register(initial))
    }
}

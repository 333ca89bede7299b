//! Main Library struct: an ordered, observable collection of book records.

use crate::error::{Result, StoreError};
use crate::subject::{DeliveryPolicy, Subject, SubscriberId, SubscriberResult};
use crate::types::{Book, LibraryEvent, Record, RecordId};
use tracing::debug;

/// Library configuration.
#[derive(Clone, Debug, Default)]
pub struct LibraryConfig {
    /// What `notify` does when a subscriber fails.
    pub delivery_policy: DeliveryPolicy,
}

/// An ordered in-memory collection of book records.
///
/// Identifiers are assigned at insertion from a monotonically increasing
/// counter and never reused, even after removal. Every mutation of the
/// catalog is delivered to subscribers synchronously, in subscription order,
/// before the mutating call returns.
///
/// A library is an explicitly constructed instance owned by its caller;
/// there is no process-wide singleton. All mutating operations take
/// `&mut self`, which also means a subscriber cannot re-enter the library
/// during dispatch. A multi-threaded host wraps the library in its own
/// mutual exclusion.
pub struct Library {
    /// Records in insertion order.
    records: Vec<Record>,

    /// Next identifier to assign. Never decremented.
    next_id: u64,

    /// Change notification fan-out.
    subject: Subject<LibraryEvent>,
}

impl Library {
    /// Create a library with the default configuration.
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// Create a library with an explicit configuration.
    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            subject: Subject::with_policy(config.delivery_policy),
        }
    }

    // --- Subscriptions ---

    /// Subscribe to change notifications.
    ///
    /// Only future mutations are delivered; there is no historical catch-up.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&LibraryEvent) -> SubscriberResult + 'static,
    {
        self.subject.subscribe(callback)
    }

    /// Unsubscribe. Returns `false` for a stale handle.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subject.unsubscribe(id)
    }

    /// Get the subscriber count.
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }

    // --- Record Operations ---

    /// Add a book to the catalog.
    ///
    /// Assigns the next unused identifier, appends the record, then delivers
    /// exactly one [`LibraryEvent::Added`] carrying the new record. Returns
    /// the assigned identifier. Under [`DeliveryPolicy::FailFast`] a failing
    /// subscriber aborts delivery, but the record stays inserted.
    pub fn add(&mut self, book: Book) -> Result<RecordId> {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        let record = Record { id, book };
        self.records.push(record.clone());
        debug!(id = %id, title = %record.book.title, "record added");

        self.subject.notify(&LibraryEvent::Added { record })?;
        Ok(id)
    }

    /// Remove a record by identifier.
    ///
    /// When present, the record is removed (surviving records keep their
    /// identifiers and relative order), exactly one [`LibraryEvent::Removed`]
    /// is delivered, and the removed record is returned. When absent the
    /// call is an idempotent no-op: no notification, and the identifier
    /// counter is untouched.
    pub fn remove(&mut self, id: RecordId) -> Result<Option<Record>> {
        let Some(position) = self.records.iter().position(|r| r.id == id) else {
            debug!(id = %id, "remove of absent record ignored");
            return Ok(None);
        };

        let record = self.records.remove(position);
        debug!(id = %id, "record removed");

        self.subject.notify(&LibraryEvent::Removed {
            record: record.clone(),
        })?;
        Ok(Some(record))
    }

    /// Look up a record by identifier. Absence is not an error.
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Flip a record's read flag and return the new value.
    ///
    /// Unlike [`remove`], toggling a record that is not in the catalog is a
    /// caller error and comes back as [`StoreError::NotFound`]. No
    /// notification is emitted; the event set covers only membership
    /// changes.
    ///
    /// [`remove`]: Library::remove
    pub fn toggle_read(&mut self, id: RecordId) -> Result<bool> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;

        record.book.read = !record.book.read;
        debug!(id = %id, read = record.book.read, "read status toggled");
        Ok(record.book.read)
    }

    /// Number of records currently catalogued.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

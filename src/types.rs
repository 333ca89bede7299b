//! Core types for the book catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a record.
///
/// Assigned by the library at insertion time from a monotonically increasing
/// counter. Identifiers are never reused within a process lifetime, even
/// after the record is removed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogued book: the caller-defined payload of a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub page_count: u32,
    pub year_published: i32,
    /// Whether the book has been read. Flipped through
    /// [`Library::toggle_read`](crate::Library::toggle_read) once the book
    /// is catalogued.
    pub read: bool,
}

impl Book {
    /// Create an unread book.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: u32,
        year_published: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page_count,
            year_published,
            read: false,
        }
    }

    /// Mark the book as already read.
    pub fn already_read(mut self) -> Self {
        self.read = true;
        self
    }
}

/// A single record in the library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier (assigned by the library).
    pub id: RecordId,

    /// The catalogued book.
    pub book: Book,
}

/// Change notifications emitted by a [`Library`](crate::Library).
///
/// The variant set is closed: consumers match exhaustively, so an unhandled
/// event is a compile error rather than a silent fall-through.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// A record was added to the catalog.
    Added { record: Record },

    /// A record was removed from the catalog.
    Removed { record: Record },
}

impl LibraryEvent {
    /// The record the event concerns.
    pub fn record(&self) -> &Record {
        match self {
            LibraryEvent::Added { record } | LibraryEvent::Removed { record } => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId(7).to_string(), "7");
        assert_eq!(format!("{:?}", RecordId(7)), "RecordId(7)");
    }

    #[test]
    fn test_book_builder() {
        let book = Book::new("Leviathan Wakes", "James S.A. Corey", 577, 2011);
        assert!(!book.read);

        let read = book.already_read();
        assert!(read.read);
        assert_eq!(read.title, "Leviathan Wakes");
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = LibraryEvent::Added {
            record: Record {
                id: RecordId(0),
                book: Book::new("Cibola Burn", "James S.A. Corey", 591, 2014),
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "added");
        assert_eq!(value["record"]["id"], 0);
        assert_eq!(value["record"]["book"]["title"], "Cibola Burn");
    }
}

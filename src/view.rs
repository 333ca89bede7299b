//! Dispatch sinks: consumers that turn change notifications into
//! presentation-surface mutations.
//!
//! A sink is a pure reaction. It receives each [`LibraryEvent`] through a
//! single entry point and branches exhaustively on the variant; it never
//! calls back into the originating library (dispatch holds the library
//! mutably borrowed, so the compiler rejects the attempt).

use crate::store::Library;
use crate::subject::SubscriberId;
use crate::types::{LibraryEvent, Record, RecordId};
use std::cell::RefCell;
use std::rc::Rc;

/// A consumer of catalog change notifications.
pub trait RenderSink {
    /// React to one event.
    fn apply(&mut self, event: &LibraryEvent);
}

/// Subscribe a sink to a library's change notifications.
///
/// The sink is shared through `Rc<RefCell<_>>` so the caller can keep
/// inspecting it while it stays subscribed. Sinks are infallible
/// subscribers; delivery policy never comes into play for them.
pub fn attach_sink<S>(library: &mut Library, sink: Rc<RefCell<S>>) -> SubscriberId
where
    S: RenderSink + 'static,
{
    library.subscribe(move |event| {
        sink.borrow_mut().apply(event);
        Ok(())
    })
}

/// One rendered entry on the presentation surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// Identifier of the record this entry renders, so the entry can be
    /// located again when the record goes away.
    pub id: RecordId,

    /// Rendered text.
    pub label: String,
}

/// An in-memory presentation surface: an ordered list of rendered entries.
///
/// `Added` renders the record into a text label and appends an entry tagged
/// with the record's identifier; `Removed` locates the entry by identifier
/// and removes it. Labels are snapshots taken at render time.
#[derive(Debug, Default)]
pub struct ListView {
    entries: Vec<ListEntry>,
}

impl ListView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    fn render(record: &Record) -> String {
        let book = &record.book;
        let status = if book.read { "read" } else { "unread" };
        format!(
            "{} by {} ({}, {} pages) [{}]",
            book.title, book.author, book.year_published, book.page_count, status
        )
    }

    /// Number of rendered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the surface is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry rendered for a record, if any.
    pub fn entry(&self, id: RecordId) -> Option<&ListEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Whether a record is currently rendered.
    pub fn contains(&self, id: RecordId) -> bool {
        self.entry(id).is_some()
    }

    /// Rendered labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }
}

impl RenderSink for ListView {
    fn apply(&mut self, event: &LibraryEvent) {
        match event {
            LibraryEvent::Added { record } => {
                self.entries.push(ListEntry {
                    id: record.id,
                    label: Self::render(record),
                });
            }
            LibraryEvent::Removed { record } => {
                self.entries.retain(|entry| entry.id != record.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Book;

    fn added(id: u64, title: &str) -> LibraryEvent {
        LibraryEvent::Added {
            record: Record {
                id: RecordId(id),
                book: Book::new(title, "James S.A. Corey", 518, 2021),
            },
        }
    }

    fn removed(id: u64, title: &str) -> LibraryEvent {
        LibraryEvent::Removed {
            record: Record {
                id: RecordId(id),
                book: Book::new(title, "James S.A. Corey", 518, 2021),
            },
        }
    }

    #[test]
    fn test_added_inserts_tagged_entry() {
        let mut view = ListView::new();
        view.apply(&added(3, "Leviathan Falls"));

        let entry = view.entry(RecordId(3)).unwrap();
        assert_eq!(
            entry.label,
            "Leviathan Falls by James S.A. Corey (2021, 518 pages) [unread]"
        );
    }

    #[test]
    fn test_removed_locates_entry_by_identifier() {
        let mut view = ListView::new();
        view.apply(&added(0, "Leviathan Wakes"));
        view.apply(&added(1, "Caliban's War"));

        view.apply(&removed(0, "Leviathan Wakes"));
        assert!(!view.contains(RecordId(0)));
        assert!(view.contains(RecordId(1)));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_display_order_is_arrival_order() {
        let mut view = ListView::new();
        view.apply(&added(0, "Leviathan Wakes"));
        view.apply(&added(1, "Caliban's War"));

        let labels = view.labels();
        assert!(labels[0].starts_with("Leviathan Wakes"));
        assert!(labels[1].starts_with("Caliban's War"));
    }

    #[test]
    fn test_read_flag_shows_in_label() {
        let mut view = ListView::new();
        view.apply(&LibraryEvent::Added {
            record: Record {
                id: RecordId(0),
                book: Book::new("Leviathan Wakes", "James S.A. Corey", 577, 2011).already_read(),
            },
        });

        assert!(view.entry(RecordId(0)).unwrap().label.ends_with("[read]"));
    }
}

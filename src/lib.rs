//! # Bookshelf
//!
//! An observable in-memory book catalog. Records (a book payload plus a
//! store-assigned identifier) live in an ordered list; every mutation is
//! announced synchronously to subscribers, which turn the change into a
//! presentation-surface update.
//!
//! ## Core Concepts
//!
//! - **Records**: a book plus an identifier assigned at insertion, never
//!   reused within the process lifetime
//! - **Subject**: an ordered subscriber list with synchronous, in-order
//!   dispatch and explicit unsubscribe handles
//! - **Events**: a closed `Added`/`Removed` set, matched exhaustively
//! - **Sinks**: consumers that mirror the catalog onto a rendered surface
//!
//! ## Example
//!
//! ```
//! use bookshelf::{attach_sink, Book, Library, ListView};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut library = Library::new();
//! let view = Rc::new(RefCell::new(ListView::new()));
//! attach_sink(&mut library, Rc::clone(&view));
//!
//! let id = library.add(Book::new("Leviathan Wakes", "James S.A. Corey", 577, 2011))?;
//! assert!(view.borrow().contains(id));
//!
//! library.remove(id)?;
//! assert!(view.borrow().is_empty());
//! # Ok::<(), bookshelf::StoreError>(())
//! ```

pub mod error;
pub mod store;
pub mod subject;
pub mod types;
pub mod view;

// Re-exports
pub use error::{Result, StoreError};
pub use store::{Library, LibraryConfig};
pub use subject::{DeliveryPolicy, Subject, SubscriberError, SubscriberId, SubscriberResult};
pub use types::{Book, LibraryEvent, Record, RecordId};
pub use view::{attach_sink, ListEntry, ListView, RenderSink};

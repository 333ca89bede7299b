//! Error types for the book catalog.

use crate::subject::{SubscriberError, SubscriberId};
use crate::types::RecordId;
use thiserror::Error;

/// Main error type for library operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Subscriber {id} failed during notify")]
    Subscriber {
        id: SubscriberId,
        #[source]
        source: SubscriberError,
    },
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, StoreError>;

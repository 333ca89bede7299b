//! Synchronous publish/subscribe primitive.
//!
//! A [`Subject`] owns an ordered list of subscriber callbacks and delivers
//! each event to every subscriber, in subscription order, on the calling
//! thread. `notify` does not return until every subscriber has run.

use crate::error::{Result, StoreError};
use std::fmt;
use tracing::warn;

/// Error produced by a subscriber callback.
pub type SubscriberError = Box<dyn std::error::Error + Send + Sync>;

/// What a subscriber callback returns.
pub type SubscriberResult = std::result::Result<(), SubscriberError>;

/// Handle returned by [`Subject::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

impl fmt::Debug for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({})", self.0)
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What `notify` does when a subscriber returns an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Stop at the first failing subscriber and propagate its error.
    /// Subscribers later in the list do not see the event.
    FailFast,

    /// Log the failure and keep delivering to the remaining subscribers.
    Isolate,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        DeliveryPolicy::FailFast
    }
}

type Callback<E> = Box<dyn FnMut(&E) -> SubscriberResult>;

/// An ordered subscriber list with synchronous dispatch.
///
/// Subscribers are kept in subscription order and may contain duplicates;
/// the same party subscribing twice is delivered to twice.
pub struct Subject<E> {
    subscribers: Vec<(SubscriberId, Callback<E>)>,
    /// Counter for generating subscriber IDs.
    next_id: u64,
    policy: DeliveryPolicy,
}

impl<E> Subject<E> {
    /// Create a subject with the default fail-fast delivery policy.
    pub fn new() -> Self {
        Self::with_policy(DeliveryPolicy::default())
    }

    /// Create a subject with an explicit delivery policy.
    pub fn with_policy(policy: DeliveryPolicy) -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
            policy,
        }
    }

    /// Append a callback to the subscriber list.
    ///
    /// Returns a handle that can later be passed to [`unsubscribe`].
    /// Subscription affects only future notifications; nothing is replayed.
    ///
    /// [`unsubscribe`]: Subject::unsubscribe
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&E) -> SubscriberResult + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` for a stale handle.
    ///
    /// Remaining subscribers keep their relative order.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Get the subscriber count.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// The configured delivery policy.
    pub fn policy(&self) -> DeliveryPolicy {
        self.policy
    }

    /// Deliver an event to every current subscriber, in subscription order.
    ///
    /// Dispatch is fully synchronous. Under [`DeliveryPolicy::FailFast`] the
    /// first subscriber error aborts delivery to the remaining subscribers
    /// and comes back as [`StoreError::Subscriber`]; under
    /// [`DeliveryPolicy::Isolate`] failures are logged and delivery
    /// continues.
    pub fn notify(&mut self, event: &E) -> Result<()> {
        for (id, callback) in self.subscribers.iter_mut() {
            if let Err(source) = callback(event) {
                match self.policy {
                    DeliveryPolicy::FailFast => {
                        return Err(StoreError::Subscriber { id: *id, source });
                    }
                    DeliveryPolicy::Isolate => {
                        warn!(subscriber = id.0, error = %source, "subscriber failed, continuing delivery");
                    }
                }
            }
        }
        Ok(())
    }
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self::new()
    }
}

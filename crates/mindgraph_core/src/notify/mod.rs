//! Synchronous in-process change notification.
//!
//! # Responsibility
//! - Deliver the latest snapshot to every subscriber after each committed
//!   mutation, in subscription order.
//!
//! # Invariants
//! - A panicking subscriber is isolated: later subscribers still run and
//!   the panic never unwinds into the mutating caller.
//! - Delivery is synchronous; by the time `publish` returns, every live
//!   subscriber has seen the snapshot.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::error;

use crate::model::snapshot::Snapshot;

/// Handle returned by [`ChangeNotifier::subscribe`]; pass it back to
/// [`ChangeNotifier::unsubscribe`] to stop delivery.
pub type SubscriberId = u64;

type Callback = Box<dyn FnMut(&Snapshot)>;

/// Minimal publish/subscribe registry for workspace snapshots.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriberId, Callback)>,
    next_id: SubscriberId,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback; it will receive every snapshot published after
    /// this call, in subscription order relative to other subscribers.
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns false when the id is unknown, which is
    /// not an error: double-unsubscribe is harmless.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Delivers the snapshot to every subscriber in subscription order.
    ///
    /// A panic inside one callback is caught and logged so the remaining
    /// subscribers still run and the caller's commit path is unaffected.
    pub fn publish(&mut self, snapshot: &Snapshot) {
        for (id, callback) in &mut self.subscribers {
            let outcome = catch_unwind(AssertUnwindSafe(|| callback(snapshot)));
            if outcome.is_err() {
                error!(
                    "event=notify_deliver module=notify status=error error_code=subscriber_panic subscriber_id={id}"
                );
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

//! Transient notification (toast) store.
//!
//! DESIGN
//! ======
//! An in-memory, push-ordered list of short-lived messages. Each `push`
//! schedules an independent removal task, so pending expiries may fire in
//! any order relative to push order. Subscribers observe the sequence
//! through a `tokio::sync::watch` channel: a new receiver sees the current
//! state immediately and every change after, and dropping it unsubscribes.
//! The removal task captures only the toast id and a `Weak` handle to the
//! store internals, so it cannot keep a torn-down store alive.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastMessage {
    /// Unique among live messages; allocated from a store-private counter.
    pub id: u64,
    pub text: String,
    pub kind: ToastKind,
}

struct ToastStoreInner {
    toasts: Vec<ToastMessage>,
    next_id: u64,
    tx: watch::Sender<Vec<ToastMessage>>,
}

/// Cloneable handle to the shared toast list.
#[derive(Clone)]
pub struct ToastStore {
    inner: Arc<Mutex<ToastStoreInner>>,
}

impl ToastStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Mutex::new(ToastStoreInner { toasts: Vec::new(), next_id: 0, tx })),
        }
    }

    /// Append a message with the default display duration. Returns its id.
    ///
    /// Must be called from within a Tokio runtime: removal is scheduled as a
    /// spawned task.
    pub fn push(&self, text: impl Into<String>, kind: ToastKind) -> u64 {
        self.push_with_duration(text, kind, DEFAULT_TOAST_DURATION)
    }

    /// Append a message and schedule its removal after `duration`.
    pub fn push_with_duration(&self, text: impl Into<String>, kind: ToastKind, duration: Duration) -> u64 {
        let id = {
            let mut inner = lock(&self.inner);
            inner.next_id += 1;
            let id = inner.next_id;
            inner.toasts.push(ToastMessage { id, text: text.into(), kind });
            publish(&inner);
            id
        };

        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            expire(&weak, id);
        });

        id
    }

    /// Remove the message with the given id. A missing id is a no-op.
    pub fn remove(&self, id: u64) {
        let mut inner = lock(&self.inner);
        remove_locked(&mut inner, id);
    }

    /// Current sequence, in push order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ToastMessage> {
        lock(&self.inner).toasts.clone()
    }

    /// Observe the sequence. The receiver holds the current value and is
    /// notified on every change; dropping it cancels the subscription.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<ToastMessage>> {
        lock(&self.inner).tx.subscribe()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn lock(inner: &Arc<Mutex<ToastStoreInner>>) -> MutexGuard<'_, ToastStoreInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Timer fire point. The store may already be gone; expiry then does nothing.
fn expire(weak: &Weak<Mutex<ToastStoreInner>>, id: u64) {
    let Some(inner) = weak.upgrade() else { return };
    let mut inner = lock(&inner);
    remove_locked(&mut inner, id);
}

fn remove_locked(inner: &mut ToastStoreInner, id: u64) {
    let before = inner.toasts.len();
    inner.toasts.retain(|t| t.id != id);
    if inner.toasts.len() != before {
        publish(inner);
    }
}

fn publish(inner: &ToastStoreInner) {
    inner.tx.send_replace(inner.toasts.clone());
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;

// --- File: crates/farelane_checkout/src/pending.rs ---
//! Registry of payment attempts awaiting their provider confirmation.

use farelane_common::PaymentConfirmation;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;
use tracing::debug;

/// Order-id-keyed registry of single-shot confirmation channels.
///
/// Each registered attempt holds the sender half of a one-shot channel;
/// resolving or dismissing consumes it. Nothing here times out: an attempt
/// the provider never completes simply sits until dismissed or replaced.
/// No polling, no implicit retry.
#[derive(Default)]
pub struct PendingConfirmations {
    pending: Mutex<HashMap<String, oneshot::Sender<PaymentConfirmation>>>,
}

impl PendingConfirmations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attempt for `order_id`, returning the receiver half.
    ///
    /// A previous attempt for the same order is dropped, closing its
    /// receiver.
    pub fn register(&self, order_id: &str) -> oneshot::Receiver<PaymentConfirmation> {
        let (tx, rx) = oneshot::channel();
        let replaced = self
            .pending
            .lock()
            .expect("pending confirmations lock poisoned")
            .insert(order_id.to_string(), tx);
        if replaced.is_some() {
            debug!(order_id, "Replaced a pending payment attempt");
        }
        rx
    }

    /// Resolve the attempt for `order_id` with the provider confirmation.
    ///
    /// Returns `false` when no such attempt is pending (stale or duplicate
    /// callback) or when the waiting side already went away.
    pub fn resolve(&self, order_id: &str, confirmation: PaymentConfirmation) -> bool {
        let sender = self
            .pending
            .lock()
            .expect("pending confirmations lock poisoned")
            .remove(order_id);
        match sender {
            Some(tx) => tx.send(confirmation).is_ok(),
            None => false,
        }
    }

    /// Drop the attempt for `order_id` without a confirmation.
    ///
    /// The user closed the widget; the waiting side observes a closed
    /// channel and nothing else happens. Returns `false` when the order was
    /// not pending.
    pub fn dismiss(&self, order_id: &str) -> bool {
        self.pending
            .lock()
            .expect("pending confirmations lock poisoned")
            .remove(order_id)
            .is_some()
    }
}

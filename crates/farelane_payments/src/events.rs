// --- File: crates/farelane_payments/src/events.rs ---
//! Structured outcome events for the payment flow.
//!
//! The widget detour resolves long after `initiate_payment` returned, so its
//! outcome cannot travel back through a return value. Whatever presentation
//! layer is attached receives these events and decides how to surface them.

use farelane_common::BookingId;
use serde::Serialize;
use tracing::{info, warn};

/// Sink for asynchronous coordinator outcomes.
pub trait CoordinatorEvents: Send + Sync {
    fn handle_event(&self, event: CoordinatorEvent);
}

/// Outcomes delivered through [`CoordinatorEvents`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoordinatorEvent {
    /// The actionable view was replaced after a successful fetch.
    BookingsRefreshed { actionable: usize },
    /// A widget confirmation was verified and persisted by the backend.
    PaymentCompleted { booking_id: BookingId },
    /// Verification of a widget confirmation failed. The attempt is over;
    /// a retry starts a fresh order.
    PaymentVerificationFailed {
        booking_id: BookingId,
        reason: String,
    },
    /// The session ended mid-flow; re-authentication is required.
    SessionTerminated,
}

/// Event sink that reports outcomes through the tracing subscriber.
///
/// The default sink for headless deployments; an interactive presentation
/// layer supplies its own.
pub struct TracingEvents;

impl CoordinatorEvents for TracingEvents {
    fn handle_event(&self, event: CoordinatorEvent) {
        match event {
            CoordinatorEvent::BookingsRefreshed { actionable } => {
                info!(actionable, "Actionable bookings refreshed")
            }
            CoordinatorEvent::PaymentCompleted { booking_id } => {
                info!(booking_id, "Payment completed")
            }
            CoordinatorEvent::PaymentVerificationFailed { booking_id, reason } => {
                warn!(booking_id, %reason, "Payment verification failed")
            }
            CoordinatorEvent::SessionTerminated => warn!("Session terminated"),
        }
    }
}

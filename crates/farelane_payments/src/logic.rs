// --- File: crates/farelane_payments/src/logic.rs ---
//! Booking payment lifecycle coordination.
//!
//! [`BookingPaymentCoordinator`] owns the in-memory view of the current
//! user's actionable bookings and drives each booking through payment or
//! cancellation. All collaborators are injected trait objects; the
//! coordinator itself keeps no state beside the cached view and the
//! in-flight bookkeeping, so a failed operation always leaves it ready for a
//! retry.

use crate::error::PaymentFlowError;
use crate::events::{CoordinatorEvent, CoordinatorEvents};
use chrono::Utc;
use farelane_common::services::{BookingGateway, BoxedError, IdentityProvider, PaymentWidget};
use farelane_common::{Booking, BookingId, CheckoutOptions, PaymentConfirmation, PaymentOrder};
use farelane_config::CheckoutConfig;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// A freshly initiated payment attempt, returned to the caller while the
/// widget detour is still open.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAttempt {
    pub booking_id: BookingId,
    /// The ephemeral provider-side order this attempt authorizes.
    pub order: PaymentOrder,
    /// Descriptor the presentation layer opens the widget with.
    pub options: CheckoutOptions,
}

/// Cached view of the current user's actionable bookings.
///
/// `generation` is the sequencing token of the fetch the view came from, so
/// a slow stale response can never overwrite a fresher one.
struct ActionableView {
    bookings: Vec<Booking>,
    generation: u64,
}

struct CoordinatorInner {
    gateway: Arc<dyn BookingGateway<Error = BoxedError>>,
    identity: Arc<dyn IdentityProvider>,
    widget: Arc<dyn PaymentWidget<Error = BoxedError>>,
    events: Arc<dyn CoordinatorEvents>,
    checkout: CheckoutConfig,
    view: Mutex<ActionableView>,
    fetch_generation: AtomicU64,
    in_flight: Mutex<HashSet<BookingId>>,
}

/// Cheap-to-clone handle; clones share the view and the in-flight state, so
/// the background verification task and the request handlers always observe
/// the same coordinator.
#[derive(Clone)]
pub struct BookingPaymentCoordinator {
    inner: Arc<CoordinatorInner>,
}

impl BookingPaymentCoordinator {
    pub fn new(
        gateway: Arc<dyn BookingGateway<Error = BoxedError>>,
        identity: Arc<dyn IdentityProvider>,
        widget: Arc<dyn PaymentWidget<Error = BoxedError>>,
        events: Arc<dyn CoordinatorEvents>,
        checkout: CheckoutConfig,
    ) -> Self {
        Self {
            inner: Arc::new(CoordinatorInner {
                gateway,
                identity,
                widget,
                events,
                checkout,
                view: Mutex::new(ActionableView {
                    bookings: Vec::new(),
                    generation: 0,
                }),
                fetch_generation: AtomicU64::new(0),
                in_flight: Mutex::new(HashSet::new()),
            }),
        }
    }

    /// The current actionable view: every observed booking whose status
    /// still permits payment or cancellation.
    pub fn actionable_bookings(&self) -> Vec<Booking> {
        self.inner
            .view
            .lock()
            .expect("view lock poisoned")
            .bookings
            .clone()
    }

    /// Booking from the actionable view by id, if present.
    pub fn find_actionable(&self, booking_id: BookingId) -> Option<Booking> {
        self.inner
            .view
            .lock()
            .expect("view lock poisoned")
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .cloned()
    }

    /// Re-resolve the current user and replace the actionable view with a
    /// fresh fetch.
    ///
    /// Absent identity is fatal to the flow: the session is terminated and
    /// no fetch is attempted. A failed fetch leaves the previous view in
    /// place; stale-but-valid beats empty.
    pub async fn refresh(&self) -> Result<Vec<Booking>, PaymentFlowError> {
        let Some(user_id) = self.inner.identity.current_user_id() else {
            warn!("No authenticated user, terminating session");
            self.inner.identity.terminate_session();
            self.inner
                .events
                .handle_event(CoordinatorEvent::SessionTerminated);
            return Err(PaymentFlowError::SessionExpired);
        };

        // Reserve the sequencing token before the fetch starts, so two
        // racing refreshes resolve by request order, not response order.
        let generation = self.inner.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let fetched = self
            .inner
            .gateway
            .get_bookings_by_user(&user_id)
            .await
            .map_err(|err| {
                warn!(error = %err, "Failed to fetch bookings");
                PaymentFlowError::RefreshFailed(err.to_string())
            })?;

        let actionable: Vec<Booking> =
            fetched.into_iter().filter(|b| b.is_actionable()).collect();

        let (applied, view) = {
            let mut view = self.inner.view.lock().expect("view lock poisoned");
            if generation > view.generation {
                view.generation = generation;
                view.bookings = actionable;
                (true, view.bookings.clone())
            } else {
                debug!(generation, "Discarding stale booking fetch");
                (false, view.bookings.clone())
            }
        };
        if applied {
            self.inner
                .events
                .handle_event(CoordinatorEvent::BookingsRefreshed {
                    actionable: view.len(),
                });
        }
        Ok(view)
    }

    /// Start a payment attempt for a booking from the last-fetched set.
    ///
    /// Creates a fresh provider-side order, hands it to the widget and
    /// returns immediately; the widget's single-shot confirmation, if it
    /// ever arrives, is verified on a background task and reported through
    /// the event sink. Any failure before the widget opens leaves the
    /// coordinator exactly as it was.
    pub async fn initiate_payment(
        &self,
        booking: &Booking,
    ) -> Result<PaymentAttempt, PaymentFlowError> {
        let booking_id = booking.booking_id;
        {
            let mut in_flight = self
                .inner
                .in_flight
                .lock()
                .expect("in-flight lock poisoned");
            if !in_flight.insert(booking_id) {
                return Err(PaymentFlowError::PaymentInFlight(booking_id));
            }
        }
        let attempt = self.start_attempt(booking).await;
        if attempt.is_err() {
            // Nothing reached the widget; the booking is immediately
            // retryable.
            self.release(booking_id);
        }
        attempt
    }

    async fn start_attempt(
        &self,
        booking: &Booking,
    ) -> Result<PaymentAttempt, PaymentFlowError> {
        let booking_id = booking.booking_id;
        let amount_minor = booking
            .amount_minor()
            .ok_or(PaymentFlowError::InvalidAmount(booking_id))?;

        let order = self
            .inner
            .gateway
            .create_payment_order(amount_minor)
            .await
            .map_err(|err| {
                warn!(booking_id, error = %err, "Failed to create payment order");
                PaymentFlowError::OrderCreationFailed(err.to_string())
            })?;

        let options = self.checkout_options(booking_id, &order);
        let receiver = self.inner.widget.authorize(options.clone()).map_err(|err| {
            warn!(booking_id, error = %err, "Failed to open payment widget");
            PaymentFlowError::WidgetUnavailable(err.to_string())
        })?;

        info!(
            booking_id,
            order_id = %order.order_id,
            amount = order.amount,
            "Payment attempt started"
        );

        let coordinator = self.clone();
        tokio::spawn(async move {
            coordinator.await_confirmation(booking_id, receiver).await;
        });

        Ok(PaymentAttempt {
            booking_id,
            order,
            options,
        })
    }

    /// Request cancellation of a booking. The backend is authoritative; a
    /// stale id is its to reject.
    pub async fn cancel(&self, booking_id: BookingId) -> Result<(), PaymentFlowError> {
        match self.inner.gateway.delete_booking(booking_id).await {
            Ok(()) => {
                info!(booking_id, "Booking cancelled");
                // Reconcile the view; the cancellation itself already
                // succeeded, so a failed refresh only leaves the view stale.
                if let Err(err) = self.refresh().await {
                    warn!(booking_id, error = %err, "Post-cancellation refresh failed");
                }
                Ok(())
            }
            Err(err) => {
                warn!(booking_id, error = %err, "Cancellation failed");
                Err(PaymentFlowError::CancellationFailed {
                    booking_id,
                    backend_message: err.backend_message().map(String::from),
                })
            }
        }
    }

    /// Long-lived suspension point: waits for the widget's single-shot
    /// confirmation. A closed channel means the attempt ended without a
    /// confirmation; that is a terminal non-event, not an error.
    async fn await_confirmation(
        self,
        booking_id: BookingId,
        receiver: oneshot::Receiver<PaymentConfirmation>,
    ) {
        match receiver.await {
            Ok(confirmation) => self.complete_payment(booking_id, confirmation).await,
            Err(_) => {
                debug!(booking_id, "Payment attempt ended without a confirmation");
            }
        }
        self.release(booking_id);
    }

    async fn complete_payment(&self, booking_id: BookingId, confirmation: PaymentConfirmation) {
        // Identity may have changed across the widget detour, so it is
        // re-resolved here rather than captured at initiation.
        let Some(user_id) = self.inner.identity.current_user_id() else {
            warn!(booking_id, "No authenticated user after payment, terminating session");
            self.inner.identity.terminate_session();
            self.inner
                .events
                .handle_event(CoordinatorEvent::SessionTerminated);
            return;
        };

        match self
            .inner
            .gateway
            .verify_payment(confirmation, booking_id, &user_id)
            .await
        {
            Ok(verification) => {
                info!(booking_id, status = %verification.status, "Payment verified");
                self.inner
                    .events
                    .handle_event(CoordinatorEvent::PaymentCompleted { booking_id });
                // Reconcile the view with the backend-confirmed state. The
                // payment already succeeded; a failed refresh only leaves
                // the view stale.
                if let Err(err) = self.refresh().await {
                    warn!(booking_id, error = %err, "Post-payment refresh failed");
                }
            }
            Err(err) => {
                warn!(booking_id, error = %err, "Payment verification failed");
                self.inner
                    .events
                    .handle_event(CoordinatorEvent::PaymentVerificationFailed {
                        booking_id,
                        reason: err.to_string(),
                    });
            }
        }
    }

    fn checkout_options(&self, booking_id: BookingId, order: &PaymentOrder) -> CheckoutOptions {
        let checkout = &self.inner.checkout;
        CheckoutOptions {
            key: checkout.provider_key.clone(),
            order_id: order.order_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            name: checkout.display_name.clone(),
            description: format!("Payment for booking {booking_id}"),
            theme_color: checkout.theme_color.clone(),
            prefill: checkout.prefill.clone(),
            reference: format!("farelane-{}-{}", booking_id, Utc::now().timestamp_millis()),
        }
    }

    fn release(&self, booking_id: BookingId) {
        self.inner
            .in_flight
            .lock()
            .expect("in-flight lock poisoned")
            .remove(&booking_id);
    }
}

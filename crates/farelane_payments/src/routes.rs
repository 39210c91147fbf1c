// --- File: crates/farelane_payments/src/routes.rs ---

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    cancel_booking_handler, initiate_payment_handler, list_bookings_handler, PaymentsState,
};
use crate::logic::BookingPaymentCoordinator;

/// Creates a router containing all routes for the payment flow.
///
/// # Arguments
/// * `coordinator` - Shared [`BookingPaymentCoordinator`].
///
/// # Returns
/// An Axum Router configured with payment routes and state.
pub fn routes(coordinator: BookingPaymentCoordinator) -> Router {
    let payments_state = Arc::new(PaymentsState { coordinator });

    Router::new()
        // Refreshed actionable view for the presentation layer
        .route("/payments/bookings", get(list_bookings_handler))
        // Start a payment attempt; the widget detour resolves out of band
        .route("/payments/pay", post(initiate_payment_handler))
        // Cancel a booking
        .route(
            "/payments/bookings/{booking_id}",
            delete(cancel_booking_handler),
        )
        .with_state(payments_state)
}

// --- File: crates/farelane_payments/src/handlers.rs ---
use crate::logic::{BookingPaymentCoordinator, PaymentAttempt};
use axum::{
    extract::{Path, State},
    response::{Json, Response},
};
use farelane_common::{map_json_error, Booking, BookingId, FarelaneError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// --- State for Payment Handlers ---
#[derive(Clone)]
pub struct PaymentsState {
    pub coordinator: BookingPaymentCoordinator,
}

/// Request to start a payment attempt for a booking from the current view.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InitiatePaymentRequest {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub booking_id: BookingId,
}

#[derive(Serialize, Debug)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CancellationResponse {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub booking_id: BookingId,
    #[cfg_attr(feature = "openapi", schema(example = "cancelled"))]
    pub status: String,
}

/// Axum handler returning the refreshed actionable view.
#[axum::debug_handler]
pub async fn list_bookings_handler(
    State(state): State<Arc<PaymentsState>>,
) -> Result<Json<BookingsResponse>, Response> {
    map_json_error(
        state
            .coordinator
            .refresh()
            .await
            .map(|bookings| BookingsResponse { bookings }),
        FarelaneError::from,
    )
}

/// Axum handler starting a payment attempt.
///
/// The booking must be in the last-fetched view; staleness beyond that is
/// the backend's to reject at verification time.
#[axum::debug_handler]
pub async fn initiate_payment_handler(
    State(state): State<Arc<PaymentsState>>,
    Json(payload): Json<InitiatePaymentRequest>,
) -> Result<Json<PaymentAttempt>, Response> {
    let result = match state.coordinator.find_actionable(payload.booking_id) {
        Some(booking) => state.coordinator.initiate_payment(&booking).await,
        None => Err(crate::error::PaymentFlowError::UnknownBooking(
            payload.booking_id,
        )),
    };
    map_json_error(result, FarelaneError::from)
}

/// Axum handler cancelling a booking.
#[axum::debug_handler]
pub async fn cancel_booking_handler(
    State(state): State<Arc<PaymentsState>>,
    Path(booking_id): Path<BookingId>,
) -> Result<Json<CancellationResponse>, Response> {
    map_json_error(
        state
            .coordinator
            .cancel(booking_id)
            .await
            .map(|()| CancellationResponse {
                booking_id,
                status: "cancelled".to_string(),
            }),
        FarelaneError::from,
    )
}

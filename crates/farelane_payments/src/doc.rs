// File: crates/farelane_payments/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use crate::handlers::{CancellationResponse, InitiatePaymentRequest};
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// Define dummy functions with the handlers' attributes for utoipa
#[cfg(feature = "openapi")]
#[utoipa::path(
    get,
    path = "/api/payments/bookings",
    responses(
        (status = 200, description = "Refreshed actionable bookings"),
        (status = 401, description = "Session expired; re-authentication required"),
        (status = 502, description = "Booking backend unavailable; previous view kept")
    ),
    tag = "Payments"
)]
fn doc_list_bookings_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/payments/pay",
    request_body = InitiatePaymentRequest,
    responses(
        (status = 200, description = "Payment attempt started; the widget descriptor is returned"),
        (status = 404, description = "Booking not in the actionable view"),
        (status = 409, description = "A payment for this booking is already in progress"),
        (status = 502, description = "Order creation failed; no widget was opened")
    ),
    tag = "Payments"
)]
fn doc_initiate_payment_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    delete,
    path = "/api/payments/bookings/{booking_id}",
    params(("booking_id" = i64, Path, description = "Booking to cancel")),
    responses(
        (status = 200, description = "Booking cancelled", body = CancellationResponse),
        (status = 400, description = "Backend refused the cancellation; message is verbatim"),
        (status = 502, description = "Booking backend unavailable")
    ),
    tag = "Payments"
)]
fn doc_cancel_booking_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_list_bookings_handler,
        doc_initiate_payment_handler,
        doc_cancel_booking_handler
    ),
    components(
        schemas(InitiatePaymentRequest, CancellationResponse)
    ),
    tags(
        (name = "Payments", description = "Booking payment lifecycle API")
    )
)]
pub struct PaymentsApiDoc;

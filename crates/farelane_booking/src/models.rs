// --- File: crates/farelane_booking/src/models.rs ---
//! Wire contracts for the booking backend API.
//!
//! Request bodies this client sends. Response shapes are the shared domain
//! records (`Booking`, `PaymentOrder`) parsed at this boundary.

use farelane_common::{BookingId, PaymentConfirmation};
use serde::{Deserialize, Serialize};

/// Body of `POST /payments/order`: creates a provider-side order for an
/// amount in minor currency units.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateOrderRequest {
    #[cfg_attr(feature = "openapi", schema(example = 4950))]
    pub amount: i64,
}

/// Body of `POST /payments/verify`: the widget confirmation forwarded
/// verbatim, together with the booking it pays for and the acting user.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub confirmation: PaymentConfirmation,
    pub booking_id: BookingId,
    pub user_id: String,
}

/// Backend response to a verification request.
#[derive(Deserialize, Debug)]
pub struct VerifyPaymentResponse {
    #[serde(default = "default_verified_status")]
    pub status: String,
}

fn default_verified_status() -> String {
    "verified".to_string()
}

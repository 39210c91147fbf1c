// --- File: crates/farelane_checkout/src/handlers.rs ---
use crate::pending::PendingConfirmations;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use farelane_common::PaymentConfirmation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

// --- State for Checkout Handlers ---
#[derive(Clone)]
pub struct CheckoutState {
    pub pending: Arc<PendingConfirmations>,
}

/// Success callback posted by the payment provider once the user authorized
/// a payment. Everything beside the order id is the opaque confirmation
/// payload, forwarded verbatim to whoever awaits this attempt.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationCallback {
    pub order_id: String,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CallbackAck {
    #[cfg_attr(feature = "openapi", schema(example = "accepted"))]
    pub status: String,
}

/// Axum handler for the provider's success callback.
///
/// Resolves the pending attempt for the order. The provider guarantees this
/// callback only for successful authorizations; it may never arrive at all.
#[axum::debug_handler]
pub async fn confirm_handler(
    State(state): State<Arc<CheckoutState>>,
    Json(callback): Json<ConfirmationCallback>,
) -> Result<Json<CallbackAck>, (StatusCode, String)> {
    let order_id = callback.order_id;
    let confirmation = PaymentConfirmation(Value::Object(callback.payload));

    if state.pending.resolve(&order_id, confirmation) {
        info!(%order_id, "Payment confirmation accepted");
        Ok(Json(CallbackAck {
            status: "accepted".to_string(),
        }))
    } else {
        warn!(%order_id, "Confirmation for an unknown or already resolved order");
        Err((
            StatusCode::NOT_FOUND,
            format!("No pending payment attempt for order {order_id}"),
        ))
    }
}

/// Axum handler for widget dismissal.
///
/// The user closed the checkout without paying. The provider does not
/// guarantee this signal, so it is treated as best-effort housekeeping: a
/// dismissal for an unknown order is acknowledged and ignored.
#[axum::debug_handler]
pub async fn dismiss_handler(
    State(state): State<Arc<CheckoutState>>,
    Path(order_id): Path<String>,
) -> Json<CallbackAck> {
    let status = if state.pending.dismiss(&order_id) {
        info!(%order_id, "Payment attempt dismissed");
        "dismissed"
    } else {
        "ignored"
    };
    Json(CallbackAck {
        status: status.to_string(),
    })
}

// --- File: crates/farelane_common/src/models.rs ---
//! Domain records shared between the coordinator and its collaborators.
//!
//! Everything here is validated at the gateway boundary: the backend owns
//! these records, this service only observes them. Unknown backend fields and
//! status values are preserved untouched rather than rejected.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend-assigned booking identifier.
pub type BookingId = i64;

/// Identifier of an authenticated user.
pub type UserId = String;

/// Minor currency units per major unit. Fixed by the payment provider's
/// minor-unit convention; not a per-currency parameter.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Lifecycle status of a booking as reported by the backend.
///
/// The set is open-ended: values this service does not recognize are carried
/// through as [`BookingStatus::Other`] and neither filtered nor acted upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    Pending,
    Delivered,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Delivered => "Delivered",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Other(s) => s,
        }
    }
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => BookingStatus::Pending,
            "Delivered" => BookingStatus::Delivered,
            "Cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(value: BookingStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A reservation record owned by the backend.
///
/// Observed read-only here; the coordinator mutates bookings only indirectly,
/// by issuing verification or cancellation requests the backend applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId,
    /// Non-negative amount in major currency units.
    pub price: Decimal,
    pub status: BookingStatus,
    /// Backend fields this service does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Booking {
    /// A delivered booking is never payment-actionable.
    pub fn is_actionable(&self) -> bool {
        self.status != BookingStatus::Delivered
    }

    /// Price converted to minor currency units (`price * 100`).
    ///
    /// `None` if the amount does not fit an `i64` after conversion.
    pub fn amount_minor(&self) -> Option<i64> {
        (self.price * Decimal::from(MINOR_UNITS_PER_MAJOR))
            .round()
            .to_i64()
    }
}

/// Ephemeral provider-side order created per payment attempt.
///
/// Consumed immediately by the widget and discarded once the attempt
/// resolves; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    #[serde(rename = "id")]
    pub order_id: String,
    /// Minor currency units.
    pub amount: i64,
    pub currency: String,
}

/// Opaque payload returned by the payment widget on success.
///
/// Forwarded verbatim to the backend for verification; never inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentConfirmation(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_round_trips_unknown_values() {
        let status = BookingStatus::from("InTransit".to_string());
        assert_eq!(status, BookingStatus::Other("InTransit".to_string()));
        assert_eq!(String::from(status), "InTransit");
    }

    #[test]
    fn delivered_is_never_actionable() {
        let booking: Booking = serde_json::from_str(
            r#"{"bookingId": 2, "price": 50, "status": "Delivered"}"#,
        )
        .unwrap();
        assert!(!booking.is_actionable());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let raw = r#"{"bookingId": 7, "price": 120.5, "status": "Pending", "flightNo": "FL123"}"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.extra.get("flightNo").unwrap(), "FL123");
        let back = serde_json::to_value(&booking).unwrap();
        assert_eq!(back.get("flightNo").unwrap(), "FL123");
    }

    #[test]
    fn price_converts_to_minor_units() {
        let booking: Booking = serde_json::from_str(
            r#"{"bookingId": 1, "price": 49.50, "status": "Pending"}"#,
        )
        .unwrap();
        assert_eq!(booking.price, dec!(49.50));
        assert_eq!(booking.amount_minor(), Some(4950));
    }
}

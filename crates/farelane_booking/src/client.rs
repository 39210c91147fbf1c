// --- File: crates/farelane_booking/src/client.rs ---
//! HTTP client for the booking backend API.
//!
//! Thin typed wrapper over the backend's REST surface. Every response is
//! validated here so the rest of the workspace only ever sees the shared
//! domain records.

use crate::error::BookingApiError;
use crate::models::{CreateOrderRequest, VerifyPaymentRequest, VerifyPaymentResponse};
use farelane_common::{Booking, BookingId, PaymentConfirmation, PaymentOrder, HTTP_CLIENT};
use farelane_config::BookingApiConfig;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Client for the booking/ordering backend.
#[derive(Clone)]
pub struct BookingApiClient {
    base_url: String,
    client: Client,
}

impl BookingApiClient {
    /// Create a client from configuration, reusing the shared HTTP client
    /// unless a custom timeout is configured.
    pub fn new(config: &BookingApiConfig) -> Result<Self, BookingApiError> {
        let client = match config.timeout_secs {
            Some(secs) => farelane_common::create_client(secs, true)?,
            None => HTTP_CLIENT.clone(),
        };
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Create a client with an explicit `reqwest::Client`, e.g. for tests.
    pub fn with_client(base_url: String, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /bookings/user/{userId}` — the full booking set for a user.
    pub async fn fetch_bookings(&self, user_id: &str) -> Result<Vec<Booking>, BookingApiError> {
        let url = self.url(&format!("/bookings/user/{user_id}"));
        debug!(%url, "Fetching bookings");
        let response = self.client.get(&url).send().await?;
        Self::parse_json(response).await
    }

    /// `POST /payments/order` — create a provider-side payment order.
    pub async fn create_order(&self, amount_minor: i64) -> Result<PaymentOrder, BookingApiError> {
        let url = self.url("/payments/order");
        debug!(%url, amount_minor, "Creating payment order");
        let response = self
            .client
            .post(&url)
            .json(&CreateOrderRequest {
                amount: amount_minor,
            })
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// `POST /payments/verify` — forward a widget confirmation for
    /// verification and persistence.
    pub async fn submit_verification(
        &self,
        confirmation: PaymentConfirmation,
        booking_id: BookingId,
        user_id: &str,
    ) -> Result<VerifyPaymentResponse, BookingApiError> {
        let url = self.url("/payments/verify");
        debug!(%url, booking_id, "Submitting payment verification");
        let response = self
            .client
            .post(&url)
            .json(&VerifyPaymentRequest {
                confirmation,
                booking_id,
                user_id: user_id.to_string(),
            })
            .send()
            .await?;
        Self::parse_json(response).await
    }

    /// `DELETE /bookings/{bookingId}` — request cancellation.
    ///
    /// A failure whose body is a human-readable string surfaces as
    /// [`BookingApiError::Rejected`] carrying that body verbatim.
    pub async fn remove_booking(&self, booking_id: BookingId) -> Result<(), BookingApiError> {
        let url = self.url(&format!("/bookings/{booking_id}"));
        debug!(%url, "Requesting booking cancellation");
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(%status, %body, "Booking cancellation rejected by backend");
        match rejection_message(&body) {
            Some(message) => Err(BookingApiError::Rejected {
                status_code: status.as_u16(),
                message,
            }),
            None => Err(Self::api_error(status, body)),
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, BookingApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(%status, %body, "Booking API request failed");
            return Err(Self::api_error(status, body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn api_error(status: StatusCode, body: String) -> BookingApiError {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body
        };
        BookingApiError::ApiError {
            status_code: status.as_u16(),
            message,
        }
    }
}

/// Extract a string-typed, human-readable message from a failure body.
///
/// Both a JSON string body (`"cannot cancel"`) and a plain-text body count;
/// structured JSON payloads do not.
fn rejection_message(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(message)) => Some(message),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_bodies_are_rejection_messages() {
        assert_eq!(
            rejection_message(r#""Cannot cancel a departed flight""#),
            Some("Cannot cancel a departed flight".to_string())
        );
        assert_eq!(
            rejection_message("Cancellation window has closed"),
            Some("Cancellation window has closed".to_string())
        );
    }

    #[test]
    fn structured_bodies_are_not_rejection_messages() {
        assert_eq!(rejection_message(r#"{"error": "nope"}"#), None);
        assert_eq!(rejection_message(""), None);
    }
}

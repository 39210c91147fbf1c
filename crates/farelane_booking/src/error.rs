// --- File: crates/farelane_booking/src/error.rs ---
use farelane_common::{external_service_error, FarelaneError, HttpStatusCode};
use thiserror::Error;

/// Booking-backend-specific error types.
#[derive(Error, Debug)]
pub enum BookingApiError {
    /// Error occurred during a backend API request
    #[error("Booking API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the backend API
    #[error("Booking API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The backend refused the operation and said why, in its own words.
    /// The message is suitable for showing to the user verbatim.
    #[error("{message}")]
    Rejected { status_code: u16, message: String },

    /// Error parsing a backend API response
    #[error("Failed to parse booking API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete booking API configuration
    #[error("Booking API configuration missing or incomplete")]
    ConfigError,
}

/// Convert BookingApiError to FarelaneError
impl From<BookingApiError> for FarelaneError {
    fn from(err: BookingApiError) -> Self {
        match err {
            BookingApiError::RequestError(e) => {
                FarelaneError::HttpError(format!("Booking API request error: {}", e))
            }
            BookingApiError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Booking API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            BookingApiError::Rejected { message, .. } => {
                FarelaneError::ValidationError(message)
            }
            BookingApiError::ParseError(e) => {
                FarelaneError::ParseError(format!("Booking API response parse error: {}", e))
            }
            BookingApiError::ConfigError => FarelaneError::ConfigError(
                "Booking API configuration missing or incomplete".to_string(),
            ),
        }
    }
}

impl HttpStatusCode for BookingApiError {
    fn status_code(&self) -> u16 {
        match self {
            BookingApiError::RequestError(_) => 500,
            BookingApiError::ApiError { status_code, .. } => *status_code,
            BookingApiError::Rejected { status_code, .. } => *status_code,
            BookingApiError::ParseError(_) => 400,
            BookingApiError::ConfigError => 500,
        }
    }
}

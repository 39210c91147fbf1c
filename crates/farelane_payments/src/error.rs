// --- File: crates/farelane_payments/src/error.rs ---
use farelane_common::{external_service_error, BookingId, FarelaneError, HttpStatusCode};
use thiserror::Error;

/// Payment-flow-specific error types.
///
/// Every variant is a structured value for the presentation layer to surface;
/// none of them propagate further up a call chain.
#[derive(Error, Debug)]
pub enum PaymentFlowError {
    /// Current user identity is absent. The session has already been
    /// terminated when this is returned; the flow restarts after
    /// re-authentication. Not retryable as-is.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// Fetching bookings failed. The cached view is unchanged and the call
    /// may simply be retried.
    #[error("Failed to load bookings: {0}")]
    RefreshFailed(String),

    /// Creating the provider-side order failed; no widget was opened and
    /// nothing changed.
    #[error("Failed to initiate payment: {0}")]
    OrderCreationFailed(String),

    /// The order could not be handed to the payment widget.
    #[error("Payment widget unavailable: {0}")]
    WidgetUnavailable(String),

    /// A payment attempt for this booking is already in flight.
    #[error("A payment for booking {0} is already in progress")]
    PaymentInFlight(BookingId),

    /// The referenced booking is not in the actionable view.
    #[error("Booking {0} is not available for payment or cancellation")]
    UnknownBooking(BookingId),

    /// The booking price cannot be expressed in minor currency units.
    #[error("Booking {0} has an amount that cannot be charged")]
    InvalidAmount(BookingId),

    /// Cancellation was refused. `backend_message` carries the backend's own
    /// wording when it supplied a string-typed body; it is shown verbatim.
    #[error("Failed to cancel booking {booking_id}: {}", backend_message.as_deref().unwrap_or("please try again later"))]
    CancellationFailed {
        booking_id: BookingId,
        backend_message: Option<String>,
    },
}

/// Convert PaymentFlowError to FarelaneError
impl From<PaymentFlowError> for FarelaneError {
    fn from(err: PaymentFlowError) -> Self {
        match err {
            PaymentFlowError::SessionExpired => {
                FarelaneError::SessionError("session expired".to_string())
            }
            PaymentFlowError::RefreshFailed(msg) => external_service_error("Booking API", msg),
            PaymentFlowError::OrderCreationFailed(msg) => {
                external_service_error("Booking API", msg)
            }
            PaymentFlowError::WidgetUnavailable(msg) => FarelaneError::InternalError(msg),
            PaymentFlowError::PaymentInFlight(id) => FarelaneError::ConflictError(format!(
                "a payment for booking {id} is already in progress"
            )),
            PaymentFlowError::UnknownBooking(id) => {
                FarelaneError::NotFoundError(format!("booking {id} is not actionable"))
            }
            PaymentFlowError::InvalidAmount(id) => {
                FarelaneError::ValidationError(format!("booking {id} has an unchargeable amount"))
            }
            PaymentFlowError::CancellationFailed {
                booking_id,
                backend_message,
            } => match backend_message {
                Some(message) => FarelaneError::ValidationError(message),
                None => external_service_error(
                    "Booking API",
                    format!("failed to cancel booking {booking_id}"),
                ),
            },
        }
    }
}

impl HttpStatusCode for PaymentFlowError {
    fn status_code(&self) -> u16 {
        match self {
            PaymentFlowError::SessionExpired => 401,
            PaymentFlowError::RefreshFailed(_) => 502,
            PaymentFlowError::OrderCreationFailed(_) => 502,
            PaymentFlowError::WidgetUnavailable(_) => 500,
            PaymentFlowError::PaymentInFlight(_) => 409,
            PaymentFlowError::UnknownBooking(_) => 404,
            PaymentFlowError::InvalidAmount(_) => 400,
            PaymentFlowError::CancellationFailed { backend_message, .. } => {
                if backend_message.is_some() {
                    400
                } else {
                    502
                }
            }
        }
    }
}

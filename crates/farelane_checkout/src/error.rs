// --- File: crates/farelane_checkout/src/error.rs ---
use farelane_common::{FarelaneError, HttpStatusCode};
use thiserror::Error;

/// Checkout-adapter-specific error types.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The order amount cannot be handed to the widget
    #[error("Invalid checkout amount: {0} minor units")]
    InvalidAmount(i64),

    /// No attempt is pending for the referenced order
    #[error("No pending payment attempt for order {0}")]
    UnknownOrder(String),
}

/// Convert CheckoutError to FarelaneError
impl From<CheckoutError> for FarelaneError {
    fn from(err: CheckoutError) -> Self {
        match err {
            CheckoutError::InvalidAmount(amount) => {
                FarelaneError::ValidationError(format!("invalid checkout amount: {amount}"))
            }
            CheckoutError::UnknownOrder(order_id) => {
                FarelaneError::NotFoundError(format!("no pending attempt for order {order_id}"))
            }
        }
    }
}

impl HttpStatusCode for CheckoutError {
    fn status_code(&self) -> u16 {
        match self {
            CheckoutError::InvalidAmount(_) => 400,
            CheckoutError::UnknownOrder(_) => 404,
        }
    }
}

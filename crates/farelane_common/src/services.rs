// --- File: crates/farelane_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services the
//! payment flow depends on. These traits allow for dependency injection and
//! easier testing by decoupling the coordinator from specific implementations
//! of the booking backend, the session subsystem and the payment widget.

use crate::models::{Booking, BookingId, PaymentConfirmation, PaymentOrder, UserId};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::oneshot;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

impl BoxedError {
    /// Verbatim human-readable backend message, when the wrapped failure
    /// carried a string-typed body (see [`BackendRejection`]).
    pub fn backend_message(&self) -> Option<&str> {
        self.0
            .downcast_ref::<BackendRejection>()
            .map(|r| r.message.as_str())
    }
}

/// A failure the booking backend reported with a plain string body.
///
/// Gateway implementations surface such bodies through this type so callers
/// can show the backend's own wording verbatim instead of a generic message.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BackendRejection {
    pub message: String,
}

/// A trait for booking backend operations.
///
/// This trait defines the request/response contracts consumed from the
/// booking/ordering API: transport, retries and auth-header mechanics are
/// implementation concerns.
pub trait BookingGateway: Send + Sync {
    /// Error type returned by gateway operations.
    type Error: StdError + Send + Sync + 'static;

    /// Fetch the full booking set for a user.
    fn get_bookings_by_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Create a provider-side payment order for an amount in minor units.
    fn create_payment_order(&self, amount_minor: i64)
        -> BoxFuture<'_, PaymentOrder, Self::Error>;

    /// Forward a widget confirmation for verification and persistence.
    fn verify_payment(
        &self,
        confirmation: PaymentConfirmation,
        booking_id: BookingId,
        user_id: &str,
    ) -> BoxFuture<'_, PaymentVerification, Self::Error>;

    /// Request cancellation of a booking. The backend is authoritative;
    /// stale ids are its to reject.
    fn delete_booking(&self, booking_id: BookingId) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for the session subsystem.
///
/// Only the two contracts the payment flow uses are modelled: who the
/// current user is, and forcing re-authentication.
pub trait IdentityProvider: Send + Sync {
    /// Identifier of the currently authenticated user, if any.
    fn current_user_id(&self) -> Option<UserId>;

    /// Terminate the session, forcing re-authentication. Used when identity
    /// is unexpectedly absent.
    fn terminate_session(&self);
}

/// A trait for the payment-authorization widget boundary.
///
/// The widget is an opaque third-party component running out of this
/// process's control. Authorization is fire-and-forget: the returned
/// receiver is the only possible resumption, and it is not guaranteed to
/// ever resolve — an abandoned attempt simply drops the sender.
pub trait PaymentWidget: Send + Sync {
    /// Error type returned when an attempt cannot be handed to the widget.
    type Error: StdError + Send + Sync + 'static;

    /// Hand an order descriptor to the widget and register the single-shot
    /// success signal.
    fn authorize(
        &self,
        options: CheckoutOptions,
    ) -> Result<oneshot::Receiver<PaymentConfirmation>, Self::Error>;
}

/// Descriptor handed to the payment widget for one authorization attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutOptions {
    /// Provider key identifying the merchant account.
    pub key: String,
    /// Provider-issued order id the attempt authorizes.
    pub order_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    /// Merchant display name shown by the widget.
    pub name: String,
    /// Human-readable purpose line, e.g. naming the booking.
    pub description: String,
    pub theme_color: Option<String>,
    pub prefill: Option<farelane_config::PrefillContact>,
    /// Client-side reference for correlating the attempt in logs.
    pub reference: String,
}

/// Represents the result of a payment verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVerification {
    /// The booking the payment was applied to.
    pub booking_id: BookingId,
    /// Backend-reported verification status.
    pub status: String,
}

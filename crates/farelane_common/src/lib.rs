// --- File: crates/farelane_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Domain records
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, external_service_error, internal_error, not_found, session_error,
    Context, FarelaneError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    map_json_error, IntoHttpResponse,
};

// Re-export the domain records and service seams most crates need
pub use models::{
    Booking, BookingId, BookingStatus, PaymentConfirmation, PaymentOrder, UserId,
    MINOR_UNITS_PER_MAJOR,
};
pub use services::{
    BackendRejection, BookingGateway, BoxFuture, BoxedError, CheckoutOptions, IdentityProvider,
    PaymentVerification, PaymentWidget,
};

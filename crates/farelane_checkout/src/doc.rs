// File: crates/farelane_checkout/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use crate::handlers::CallbackAck;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// Define a dummy function with the handler's attributes for utoipa
#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/checkout/confirm",
    responses(
        (status = 200, description = "Confirmation accepted; the pending attempt was resolved", body = CallbackAck),
        (status = 404, description = "No pending attempt for the referenced order")
    ),
    tag = "Checkout"
)]
fn doc_confirm_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/checkout/dismiss/{order_id}",
    params(("order_id" = String, Path, description = "Provider order id of the dismissed attempt")),
    responses(
        (status = 200, description = "Dismissal acknowledged", body = CallbackAck)
    ),
    tag = "Checkout"
)]
fn doc_dismiss_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_confirm_handler,
        doc_dismiss_handler
    ),
    components(
        schemas(CallbackAck)
    ),
    tags(
        (name = "Checkout", description = "Payment widget callback API")
    )
)]
pub struct CheckoutApiDoc;

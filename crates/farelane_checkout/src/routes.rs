// --- File: crates/farelane_checkout/src/routes.rs ---

use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handlers::{confirm_handler, dismiss_handler, CheckoutState};
use crate::pending::PendingConfirmations;

/// Creates a router containing all routes for the checkout feature.
///
/// # Arguments
/// * `pending` - Shared pending-confirmation registry, the same instance the
///   [`crate::service::HostedCheckoutWidget`] registers attempts with.
///
/// # Returns
/// An Axum Router configured with checkout callback routes and state.
pub fn routes(pending: Arc<PendingConfirmations>) -> Router {
    let checkout_state = Arc::new(CheckoutState { pending });

    Router::new()
        // Called by the payment provider's server on successful authorization
        .route("/checkout/confirm", post(confirm_handler))
        // Called when the user closes the widget; not guaranteed to arrive
        .route("/checkout/dismiss/{order_id}", post(dismiss_handler))
        .with_state(checkout_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn confirm_resolves_a_registered_attempt() {
        let pending = Arc::new(PendingConfirmations::new());
        let rx = pending.register("order_1");
        let app = routes(Arc::clone(&pending));

        let request = Request::builder()
            .method("POST")
            .uri("/checkout/confirm")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"orderId": "order_1", "paymentId": "pay_1"}).to_string(),
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "accepted");
        let confirmation = rx.await.unwrap();
        assert_eq!(confirmation.0["paymentId"], "pay_1");
    }

    #[tokio::test]
    async fn confirm_for_an_unknown_order_is_a_404() {
        let app = routes(Arc::new(PendingConfirmations::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/checkout/confirm")
            .header("content-type", "application/json")
            .body(Body::from(json!({"orderId": "order_x"}).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dismiss_is_acknowledged_even_for_unknown_orders() {
        let pending = Arc::new(PendingConfirmations::new());
        let rx = pending.register("order_1");
        let app = routes(Arc::clone(&pending));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/checkout/dismiss/order_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "dismissed");
        assert!(rx.await.is_err());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/checkout/dismiss/order_2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await["status"], "ignored");
    }
}

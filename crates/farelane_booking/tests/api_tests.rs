//! Integration tests for the booking backend client, run against a local
//! mock of the backend API.

use farelane_booking::{BookingApiClient, BookingApiError};
use farelane_common::services::BookingGateway;
use farelane_common::{BookingStatus, PaymentConfirmation};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BookingApiClient {
    BookingApiClient::with_client(server.uri(), reqwest::Client::new())
}

#[tokio::test]
async fn fetch_bookings_parses_the_backend_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings/user/user-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"bookingId": 1, "price": 100, "status": "Pending", "flightNo": "FL123"},
            {"bookingId": 2, "price": 49.50, "status": "InTransit"}
        ])))
        .mount(&server)
        .await;

    let bookings = client_for(&server).fetch_bookings("user-42").await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].booking_id, 1);
    assert_eq!(bookings[0].status, BookingStatus::Pending);
    assert_eq!(bookings[0].extra.get("flightNo").unwrap(), "FL123");
    assert_eq!(bookings[1].price, dec!(49.50));
    assert_eq!(
        bookings[1].status,
        BookingStatus::Other("InTransit".to_string())
    );
}

#[tokio::test]
async fn create_order_posts_minor_units_and_parses_the_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments/order"))
        .and(body_json(json!({"amount": 4950})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_9A33XWu170gUtm",
            "amount": 4950,
            "currency": "INR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = client_for(&server).create_order(4950).await.unwrap();

    assert_eq!(order.order_id, "order_9A33XWu170gUtm");
    assert_eq!(order.amount, 4950);
    assert_eq!(order.currency, "INR");
}

#[tokio::test]
async fn submit_verification_forwards_the_confirmation_verbatim() {
    let server = MockServer::start().await;
    let confirmation = json!({
        "razorpay_payment_id": "pay_29QQoUBi66xm2f",
        "razorpay_order_id": "order_9A33XWu170gUtm",
        "razorpay_signature": "sig"
    });
    Mock::given(method("POST"))
        .and(path("/payments/verify"))
        .and(body_json(json!({
            "confirmation": confirmation,
            "bookingId": 1,
            "userId": "user-42"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "verified"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .submit_verification(PaymentConfirmation(confirmation.clone()), 1, "user-42")
        .await
        .unwrap();

    assert_eq!(response.status, "verified");
}

#[tokio::test]
async fn remove_booking_succeeds_on_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server).remove_booking(7).await.unwrap();
}

#[tokio::test]
async fn remove_booking_surfaces_a_string_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/7"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!("Cannot cancel a booking that already departed")),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).remove_booking(7).await.unwrap_err();
    match err {
        BookingApiError::Rejected {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 400);
            assert_eq!(message, "Cannot cancel a booking that already departed");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn remove_booking_treats_structured_bodies_as_generic_failures() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/7"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "database offline"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).remove_booking(7).await.unwrap_err();
    assert!(matches!(err, BookingApiError::ApiError { status_code: 500, .. }));
}

#[tokio::test]
async fn gateway_delete_exposes_the_backend_message_to_callers() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/3"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!("Seat already released")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let gateway: &dyn BookingGateway<Error = farelane_common::BoxedError> = &client;
    let err = gateway.delete_booking(3).await.unwrap_err();

    assert_eq!(err.backend_message(), Some("Seat already released"));
}

#[tokio::test]
async fn fetch_bookings_maps_backend_failures_to_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings/user/user-42"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_bookings("user-42").await.unwrap_err();
    assert!(matches!(err, BookingApiError::ApiError { status_code: 503, .. }));
}

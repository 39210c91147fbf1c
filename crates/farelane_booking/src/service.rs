// --- File: crates/farelane_booking/src/service.rs ---
//! [`BookingGateway`] implementation backed by [`BookingApiClient`].

use crate::client::BookingApiClient;
use crate::error::BookingApiError;
use farelane_common::services::{
    BackendRejection, BookingGateway, BoxFuture, BoxedError, PaymentVerification,
};
use farelane_common::{Booking, BookingId, PaymentConfirmation, PaymentOrder};

fn boxed(err: BookingApiError) -> BoxedError {
    BoxedError(Box::new(err))
}

impl BookingGateway for BookingApiClient {
    type Error = BoxedError;

    fn get_bookings_by_user(&self, user_id: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let user_id = user_id.to_string();
        Box::pin(async move { self.fetch_bookings(&user_id).await.map_err(boxed) })
    }

    fn create_payment_order(
        &self,
        amount_minor: i64,
    ) -> BoxFuture<'_, PaymentOrder, Self::Error> {
        Box::pin(async move { self.create_order(amount_minor).await.map_err(boxed) })
    }

    fn verify_payment(
        &self,
        confirmation: PaymentConfirmation,
        booking_id: BookingId,
        user_id: &str,
    ) -> BoxFuture<'_, PaymentVerification, Self::Error> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let response = self
                .submit_verification(confirmation, booking_id, &user_id)
                .await
                .map_err(boxed)?;
            Ok(PaymentVerification {
                booking_id,
                status: response.status,
            })
        })
    }

    fn delete_booking(&self, booking_id: BookingId) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            self.remove_booking(booking_id).await.map_err(|err| match err {
                // Keep the backend's own wording reachable for callers that
                // surface it verbatim.
                BookingApiError::Rejected { message, .. } => {
                    BoxedError(Box::new(BackendRejection { message }))
                }
                other => boxed(other),
            })
        })
    }
}

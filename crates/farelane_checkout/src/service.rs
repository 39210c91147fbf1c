// --- File: crates/farelane_checkout/src/service.rs ---
//! [`PaymentWidget`] implementation backed by the hosted checkout page.
//!
//! Authorization is fire-and-forget: the order is registered with the
//! pending-confirmation registry and the provider's out-of-band callback
//! (see `handlers`) is the only thing that can ever resolve it.

use crate::error::CheckoutError;
use crate::pending::PendingConfirmations;
use farelane_common::services::{BoxedError, PaymentWidget};
use farelane_common::{CheckoutOptions, PaymentConfirmation};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;

/// Payment widget driven by the provider's hosted checkout.
pub struct HostedCheckoutWidget {
    pending: Arc<PendingConfirmations>,
}

impl HostedCheckoutWidget {
    pub fn new(pending: Arc<PendingConfirmations>) -> Self {
        Self { pending }
    }
}

impl PaymentWidget for HostedCheckoutWidget {
    type Error = BoxedError;

    fn authorize(
        &self,
        options: CheckoutOptions,
    ) -> Result<oneshot::Receiver<PaymentConfirmation>, Self::Error> {
        if options.amount <= 0 {
            return Err(BoxedError(Box::new(CheckoutError::InvalidAmount(
                options.amount,
            ))));
        }
        info!(
            order_id = %options.order_id,
            reference = %options.reference,
            amount = options.amount,
            currency = %options.currency,
            "Handing order to hosted checkout"
        );
        Ok(self.pending.register(&options.order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(amount: i64) -> CheckoutOptions {
        CheckoutOptions {
            key: "rzp_test_key".to_string(),
            order_id: "order_1".to_string(),
            amount,
            currency: "INR".to_string(),
            name: "Farelane Booking Payment".to_string(),
            description: "Payment for booking 1".to_string(),
            theme_color: None,
            prefill: None,
            reference: "farelane-1-1700000000000".to_string(),
        }
    }

    #[tokio::test]
    async fn authorize_registers_a_pending_attempt() {
        let pending = Arc::new(PendingConfirmations::new());
        let widget = HostedCheckoutWidget::new(Arc::clone(&pending));

        let rx = widget.authorize(options(4950)).unwrap();
        assert!(pending.resolve("order_1", PaymentConfirmation(json!({}))));
        assert!(rx.await.is_ok());
    }

    #[tokio::test]
    async fn authorize_rejects_non_positive_amounts() {
        let pending = Arc::new(PendingConfirmations::new());
        let widget = HostedCheckoutWidget::new(pending);

        assert!(widget.authorize(options(0)).is_err());
    }
}

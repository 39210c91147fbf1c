// --- File: crates/services/farelane_backend/src/app_state.rs ---
use crate::session::SessionIdentityProvider;
use farelane_booking::BookingApiClient;
use farelane_checkout::{HostedCheckoutWidget, PendingConfirmations};
use farelane_common::{config_error, FarelaneError};
use farelane_config::AppConfig;
use farelane_payments::{BookingPaymentCoordinator, TracingEvents};
use std::sync::Arc;

/// Application state shared across all routes.
///
/// Holds the wired payment coordinator and the pending-confirmation registry
/// the checkout callback routes resolve attempts through. Both routers get a
/// handle to the same instances, so a confirmation arriving on the callback
/// route resumes the attempt the payments route started.
pub struct AppState {
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    pub coordinator: BookingPaymentCoordinator,
    pub pending: Arc<PendingConfirmations>,
}

/// Wire the concrete collaborators into a coordinator.
pub fn build_state(config: Arc<AppConfig>) -> Result<AppState, FarelaneError> {
    let booking_config = config
        .booking_api
        .as_ref()
        .ok_or_else(|| config_error("booking_api configuration missing"))?;
    let checkout_config = config
        .checkout
        .clone()
        .ok_or_else(|| config_error("checkout configuration missing"))?;

    let gateway = Arc::new(BookingApiClient::new(booking_config).map_err(FarelaneError::from)?);
    // Session identity is seeded from the environment until the wider auth
    // subsystem signs a user in; terminate_session clears it.
    let identity = Arc::new(SessionIdentityProvider::new(
        std::env::var("FARELANE_USER_ID").ok(),
    ));
    let pending = Arc::new(PendingConfirmations::new());
    let widget = Arc::new(HostedCheckoutWidget::new(Arc::clone(&pending)));

    let coordinator = BookingPaymentCoordinator::new(
        gateway,
        identity,
        widget,
        Arc::new(TracingEvents),
        checkout_config,
    );

    Ok(AppState {
        config,
        coordinator,
        pending,
    })
}

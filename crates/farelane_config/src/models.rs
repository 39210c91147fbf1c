// --- File: crates/farelane_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Booking Backend Config ---
// Holds the location of the booking/ordering API. Auth-header mechanics are
// the transport's concern, not configured here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingApiConfig {
    pub base_url: String,
    /// Outbound request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

// --- Checkout Widget Config ---
// Provider key, branding and prefill values handed to the payment widget.
// These were literals in earlier renditions of this flow; they are
// configuration, not logic.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutConfig {
    pub provider_key: String,
    pub display_name: String,
    pub theme_color: Option<String>,
    #[serde(default)]
    pub prefill: Option<PrefillContact>,
}

/// Contact details prefilled into the payment widget.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PrefillContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub booking_api: Option<BookingApiConfig>,
    #[serde(default)]
    pub checkout: Option<CheckoutConfig>,
}

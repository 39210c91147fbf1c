pub mod models;

pub use models::{AppConfig, BookingApiConfig, CheckoutConfig, PrefillContact, ServerConfig};

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use tracing::debug;

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` once per process. Later calls are no-ops so tests and the
/// binary can both call `load_config` freely.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded environment from .env");
        }
    });
}

/// Loads the layered application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default.toml`
/// 2. `config/{RUN_ENV}.toml` (optional)
/// 3. Environment variables prefixed with `FARELANE__`, e.g.
///    `FARELANE__SERVER__PORT=8080` or `FARELANE__BOOKING_API__BASE_URL=...`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "default".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(Environment::with_prefix("FARELANE").separator("__"));

    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_config() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"server": {"host": "127.0.0.1", "port": 8086}}"#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8086);
        assert!(cfg.booking_api.is_none());
        assert!(cfg.checkout.is_none());
    }

    #[test]
    fn deserializes_checkout_section() {
        let cfg: AppConfig = serde_json::from_str(
            r##"{
                "server": {"host": "0.0.0.0", "port": 8080},
                "checkout": {
                    "provider_key": "rzp_test_key",
                    "display_name": "Farelane Booking Payment",
                    "theme_color": "#3399cc",
                    "prefill": {"name": "Test", "email": null, "contact": "7894561230"}
                }
            }"##,
        )
        .unwrap();
        let checkout = cfg.checkout.unwrap();
        assert_eq!(checkout.provider_key, "rzp_test_key");
        assert_eq!(checkout.theme_color.as_deref(), Some("#3399cc"));
        assert_eq!(
            checkout.prefill.unwrap().contact.as_deref(),
            Some("7894561230")
        );
    }
}

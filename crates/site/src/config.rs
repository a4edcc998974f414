//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KOLIBRA_HOST` - Bind address (default: 127.0.0.1)
//! - `KOLIBRA_PORT` - Listen port (default: 3000)
//! - `KOLIBRA_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `KOLIBRA_WHATSAPP_NUMBER` - Destination for quote handoffs, E.164
//!   digits without the plus (default: the business number)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use kolibra_core::whatsapp::WhatsAppNumber;

/// The business WhatsApp number every funnel hands off to.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5535999796570";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Destination number for WhatsApp handoffs
    pub whatsapp: WhatsAppNumber,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("KOLIBRA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KOLIBRA_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("KOLIBRA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KOLIBRA_PORT".to_owned(), e.to_string()))?;

        let base_url = get_env_or_default("KOLIBRA_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("KOLIBRA_BASE_URL".to_owned(), e.to_string())
        })?;

        let whatsapp =
            WhatsAppNumber::parse(&get_env_or_default("KOLIBRA_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER))
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("KOLIBRA_WHATSAPP_NUMBER".to_owned(), e.to_string())
                })?;

        Ok(Self {
            host,
            port,
            base_url,
            whatsapp,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should be marked secure.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            whatsapp: WhatsAppNumber::parse(DEFAULT_WHATSAPP_NUMBER).unwrap(),
        }
    }

    #[test]
    fn test_default_number_is_valid() {
        assert!(WhatsAppNumber::parse(DEFAULT_WHATSAPP_NUMBER).is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_secure_cookies_follows_base_url_scheme() {
        let mut config = test_config();
        assert!(!config.secure_cookies());

        config.base_url = "https://kolibrasolutions.com.br".to_owned();
        assert!(config.secure_cookies());
    }
}

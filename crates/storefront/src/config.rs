//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SWIFTCART_API_URL` - Base URL of the product catalog API
//!   (default: `https://fakestoreapi.com/products`)
//! - `SWIFTCART_CART_PATH` - Path of the persisted cart slot
//!   (default: `swiftcart_items.json`)
//! - `SWIFTCART_OUT` - Path the rendered page snapshot is written to
//!   (default: `storefront.html`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";
const DEFAULT_CART_PATH: &str = "swiftcart_items.json";
const DEFAULT_OUT_PATH: &str = "storefront.html";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the product catalog API, without a trailing slash.
    pub api_url: String,
    /// File holding the persisted cart (the local storage slot).
    pub cart_path: PathBuf,
    /// Output path for the rendered page snapshot.
    pub out_path: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when `SWIFTCART_API_URL` is
    /// set but not a valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("SWIFTCART_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SWIFTCART_API_URL".to_string(), e.to_string()))?;

        let cart_path = std::env::var("SWIFTCART_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_CART_PATH), PathBuf::from);
        let out_path = std::env::var("SWIFTCART_OUT")
            .map_or_else(|_| PathBuf::from(DEFAULT_OUT_PATH), PathBuf::from);

        Ok(Self {
            api_url: api_url.as_str().trim_end_matches('/').to_string(),
            cart_path,
            out_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_parses() {
        let url = Url::parse(DEFAULT_API_URL).expect("default URL is valid");
        assert_eq!(url.host_str(), Some("fakestoreapi.com"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let url = Url::parse("https://example.test/products/").expect("valid");
        assert_eq!(
            url.as_str().trim_end_matches('/'),
            "https://example.test/products"
        );
    }
}

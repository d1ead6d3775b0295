//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults target the public fakestore API and
//! a local `.vitrine` data directory.
//!
//! - `CATALOG_BASE_URL` - Product catalog endpoint (default: `https://fakestoreapi.com`)
//! - `CATALOG_TIMEOUT_SECS` - Catalog request timeout in seconds (default: 10)
//! - `CART_STORAGE_DIR` - Directory for the persisted cart (default: `.vitrine`)
//! - `CART_STORAGE_KEY` - Storage key for the cart document (default: `vitrine_cart_v1`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default product catalog endpoint.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";

/// Fixed storage key the cart is persisted under by default.
pub const DEFAULT_CART_STORAGE_KEY: &str = "vitrine_cart_v1";

const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CART_STORAGE_DIR: &str = ".vitrine";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Product catalog API configuration.
    pub catalog: CatalogConfig,
    /// Cart persistence configuration.
    pub cart: CartConfig,
}

/// Product catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API.
    pub base_url: Url,
    /// Timeout applied to each catalog request.
    pub timeout: Duration,
}

/// Cart persistence configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory the file-backed storage writes into.
    pub storage_dir: PathBuf,
    /// Key the serialized cart is stored under.
    pub storage_key: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse
    /// (e.g., a malformed URL or a non-numeric timeout).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            catalog: CatalogConfig::from_env()?,
            cart: CartConfig::from_env(),
        })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string())
            })?;

        let timeout_secs = match get_optional_env("CATALOG_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CATALOG_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            // The compiled-in default is a valid URL
            base_url: DEFAULT_CATALOG_BASE_URL
                .parse()
                .expect("default catalog URL is valid"),
            timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }
}

impl CartConfig {
    fn from_env() -> Self {
        Self {
            storage_dir: PathBuf::from(get_env_or_default(
                "CART_STORAGE_DIR",
                DEFAULT_CART_STORAGE_DIR,
            )),
            storage_key: get_env_or_default("CART_STORAGE_KEY", DEFAULT_CART_STORAGE_KEY),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_CART_STORAGE_DIR),
            storage_key: DEFAULT_CART_STORAGE_KEY.to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

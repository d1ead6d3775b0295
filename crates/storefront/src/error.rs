//! Unified error handling for the storefront library.
//!
//! Provides a unified `StoreError` type that wraps the per-boundary error
//! enums. Fallible entry points return `Result<T, StoreError>`.
//!
//! Note that cart mutations are deliberately absent here: every cart store
//! operation is a total function over the current state (missing lines are
//! no-ops, malformed persisted data degrades to an empty cart), so the cart
//! surface has nothing to fail with.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront library.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

//! Integration tests for Vitrine.
//!
//! # Test Categories
//!
//! - `cart_persistence` - File-backed cart round-trips across store
//!   instances (always run)
//! - `catalog_live` - Live catalog API tests; `#[ignore]`d because they
//!   need network access. Run with:
//!
//! ```bash
//! cargo test -p vitrine-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use uuid::Uuid;

/// A unique scratch directory for one test, under the system temp dir.
///
/// Each call returns a fresh path so parallel tests never share state.
#[must_use]
pub fn temp_storage_dir(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}-{}", Uuid::new_v4()))
}

//! Store context shared with the page views.
//!
//! No ambient globals: the context is an explicitly constructed value the
//! embedding application builds once and hands to its views.

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::storage::FileStorage;

/// Everything a page view needs: the catalog client and the cart store.
///
/// Deliberately not `Clone`: the cart is single-writer, and views are
/// expected to borrow the context (mutably for cart mutations) from the
/// single owner on the UI event loop.
#[derive(Debug)]
pub struct StoreContext {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
}

impl StoreContext {
    /// Build a context from configuration.
    ///
    /// Opens the file-backed cart storage under the configured directory
    /// and restores any persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created or the
    /// HTTP client cannot be built. A present-but-corrupt persisted cart is
    /// not an error; it restores as empty.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let storage = FileStorage::new(&config.cart.storage_dir)?;
        let cart = CartStore::new(Box::new(storage), config.cart.storage_key.clone());

        Ok(Self {
            config,
            catalog,
            cart,
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Get a read-only reference to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store.
    #[must_use]
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }
}

//! The cart store and its mutation operations.

use rust_decimal::Decimal;
use tracing::instrument;
use vitrine_core::ProductId;

use crate::catalog::Product;
use crate::storage::CartStorage;

use super::CartLine;

/// Single source of truth for the shopping cart.
///
/// Constructed with an injected storage port; on construction the persisted
/// cart is restored from storage (missing or malformed data degrades to an
/// empty cart). Every mutation rewrites the full line list under the
/// configured storage key.
///
/// The store is single-writer: mutations take `&mut self` and run to
/// completion, so no further sequencing discipline is needed.
#[derive(Debug)]
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Box<dyn CartStorage>,
    storage_key: String,
}

impl CartStore {
    /// Restore a cart from storage, or start empty.
    ///
    /// A missing key, an unreadable backend, or a malformed document all
    /// yield an empty cart; restoration never fails.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let lines = load_lines(storage.as_ref(), &storage_key);
        Self {
            lines,
            storage,
            storage_key,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * qty` over all lines, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines, recomputed on every call.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product in the given size.
    ///
    /// If a line for `(product.id, size)` already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended.
    #[instrument(skip(self, product), fields(id = %product.id, size = ?size))]
    pub fn add(&mut self, product: &Product, size: Option<u32>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, size))
        {
            line.qty = line.qty.saturating_add(1);
        } else {
            self.lines.push(CartLine::from_product(product, size));
        }
        self.persist();
    }

    /// Remove the line for `(id, size)`. No-op when absent.
    #[instrument(skip(self), fields(id = %id, size = ?size))]
    pub fn remove(&mut self, id: ProductId, size: Option<u32>) {
        self.lines.retain(|line| !line.matches(id, size));
        self.persist();
    }

    /// Set the quantity of the line for `(id, size)`. No-op when absent.
    ///
    /// Requests below 1 clamp to 1; the store never auto-removes a line on
    /// a zero quantity. Use [`Self::remove`] to drop a line.
    #[instrument(skip(self), fields(id = %id, size = ?size, qty = qty))]
    pub fn set_qty(&mut self, id: ProductId, size: Option<u32>, qty: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.matches(id, size)) {
            line.qty = qty.max(1);
        }
        self.persist();
    }

    /// Change the size of the line for `(id, old_size)` to `new_size`.
    ///
    /// When a line for `(id, new_size)` already exists the two lines merge
    /// by summing quantities, preserving the unique `(id, size)` invariant.
    /// No-op when the source line is absent or the sizes are equal.
    #[instrument(skip(self), fields(id = %id, old_size = ?old_size, new_size = ?new_size))]
    pub fn set_size(&mut self, id: ProductId, old_size: Option<u32>, new_size: Option<u32>) {
        if old_size == new_size {
            return;
        }
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.matches(id, old_size))
        else {
            return;
        };

        if self.lines.iter().any(|line| line.matches(id, new_size)) {
            let moved = self.lines.remove(index);
            if let Some(target) = self.lines.iter_mut().find(|line| line.matches(id, new_size)) {
                target.qty = target.qty.saturating_add(moved.qty);
            }
        } else if let Some(line) = self.lines.get_mut(index) {
            line.size = new_size;
        }
        self.persist();
    }

    /// Empty the cart unconditionally.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full line list to storage under the configured key.
    ///
    /// Fire-and-forget: a failed write is logged and swallowed so mutations
    /// stay total. The next successful write carries the latest state.
    fn persist(&mut self) {
        let document = match serde_json::to_string(&self.lines) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.storage_key, &document) {
            tracing::warn!(error = %e, key = %self.storage_key, "Failed to persist cart");
        }
    }
}

/// Read and decode the persisted cart, degrading to empty on any failure.
fn load_lines(storage: &dyn CartStorage, key: &str) -> Vec<CartLine> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<CartLine>>(&raw) {
        // Zero-quantity lines are never valid cart state
        Ok(lines) => lines.into_iter().filter(|line| line.qty > 0).collect(),
        Err(e) => {
            tracing::warn!(error = %e, key = %key, "Malformed persisted cart, starting empty");
            Vec::new()
        }
    }
}

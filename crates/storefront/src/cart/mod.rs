//! The cart store: single source of truth for the shopping cart.
//!
//! All mutations go through [`CartStore`] operations; every mutation
//! rewrites the persisted cart document through the injected
//! [`crate::storage::CartStorage`] port. Totals are derived from the lines
//! on demand and never cached.
//!
//! # Invariants
//!
//! - The `(product id, size)` pair is unique among lines: adding an already
//!   present combination increments its quantity.
//! - Quantities are at least 1. `set_qty` clamps requests below 1 up to 1;
//!   lines leave the cart only through [`CartStore::remove`] or
//!   [`CartStore::clear`].
//! - Changing a line's size onto an existing `(id, size)` pair merges the
//!   two lines by summing quantities.
//!
//! # Failure semantics
//!
//! Operations are total: a missing target line is a no-op, malformed
//! persisted state restores as an empty cart, and a failed persistence
//! write is logged and swallowed. Nothing here returns an error.

mod line;
mod store;

pub use line::CartLine;
pub use store::CartStore;

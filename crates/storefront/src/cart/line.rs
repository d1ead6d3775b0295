//! A single cart line: one `(product, size)` combination with a quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine_core::ProductId;

use crate::catalog::Product;

/// One `(product, size)` entry in the cart.
///
/// `title`, `price`, and `image` are a snapshot of the product's display
/// data at add time; they are not re-synced if the catalog product changes.
///
/// The persisted layout is a JSON object with `id`, `title`, `price` (JSON
/// number), `image`, `size` (number, absent when unselected), and `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier (foreign reference to the catalog, not owned).
    pub id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Unit price at add time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URI at add time.
    pub image: String,
    /// Selected size variant (numeric shoe size), absent until set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Quantity, at least 1.
    pub qty: u32,
}

impl CartLine {
    /// Snapshot a product into a fresh line with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product, size: Option<u32>) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            size,
            qty: 1,
        }
    }

    /// Whether this line is the `(id, size)` combination.
    #[must_use]
    pub fn matches(&self, id: ProductId, size: Option<u32>) -> bool {
        self.id == id && self.size == size
    }

    /// `price * qty` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

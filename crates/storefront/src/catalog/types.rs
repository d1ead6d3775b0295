//! Domain types for the external product catalog API.
//!
//! The wire format follows the catalog's JSON schema:
//! `{id, title, price, image, description, category, rating: {rate, count}}`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine_core::ProductId;

/// A product as served by the catalog API.
///
/// Read-only: the storefront never mutates products. The cart copies the
/// display fields it needs (`title`, `price`, `image`) as a snapshot at
/// add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the base currency unit, carried as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URI.
    pub image: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Category name, when the catalog assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Aggregate rating, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Aggregate product rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,
    /// Number of ratings contributing to the average.
    pub count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // Shape taken from a real fakestoreapi.com response.
    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_catalog_product() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::new(10_995, 2));
        assert_eq!(product.category.as_deref(), Some("men's clothing"));

        let rating = product.rating.unwrap();
        assert!((rating.rate - 3.9).abs() < f64::EPSILON);
        assert_eq!(rating.count, 120);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 2, "title": "Bare", "price": 5, "image": "x"}"#)
                .unwrap();
        assert_eq!(product.description, "");
        assert!(product.category.is_none());
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_price_serializes_as_number() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert!(value["price"].is_number());
    }
}

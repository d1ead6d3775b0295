//! End-to-end cart persistence through the file-backed storage.
//!
//! These tests exercise the full path a browsing session takes: mutate the
//! cart, drop the store, and restore it from the same directory — the
//! "reload the page" flow.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::fs;

use rust_decimal::Decimal;
use vitrine_core::ProductId;
use vitrine_integration_tests::temp_storage_dir;
use vitrine_storefront::cart::{CartLine, CartStore};
use vitrine_storefront::catalog::Product;
use vitrine_storefront::config::DEFAULT_CART_STORAGE_KEY;
use vitrine_storefront::storage::FileStorage;

fn product(id: i64, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Produto {id}"),
        price,
        image: format!("https://example.com/{id}.jpg"),
        description: "Tênis de corrida".to_string(),
        category: Some("men's clothing".to_string()),
        rating: None,
    }
}

fn open_cart(dir: &std::path::Path) -> CartStore {
    let storage = FileStorage::new(dir).expect("storage dir");
    CartStore::new(Box::new(storage), DEFAULT_CART_STORAGE_KEY)
}

/// Lines keyed by `(id, size)` so comparisons ignore line order.
fn as_map(lines: &[CartLine]) -> BTreeMap<(ProductId, Option<u32>), u32> {
    lines
        .iter()
        .map(|line| ((line.id, line.size), line.qty))
        .collect()
}

#[test]
fn cart_survives_reload() {
    let dir = temp_storage_dir("vitrine-cart-reload");

    let mut cart = open_cart(&dir);
    cart.add(&product(1, Decimal::new(19_990, 2)), Some(40));
    cart.add(&product(1, Decimal::new(19_990, 2)), Some(40));
    cart.add(&product(1, Decimal::new(19_990, 2)), Some(41));
    cart.add(&product(3, Decimal::new(8_900, 2)), None);
    cart.set_qty(ProductId::new(3), None, 2);

    let expected = as_map(cart.lines());
    let expected_total = cart.total();
    drop(cart);

    let restored = open_cart(&dir);
    assert_eq!(as_map(restored.lines()), expected);
    assert_eq!(restored.total(), expected_total);
    assert_eq!(restored.count(), 5);
}

#[test]
fn cleared_cart_stays_cleared() {
    let dir = temp_storage_dir("vitrine-cart-clear");

    let mut cart = open_cart(&dir);
    cart.add(&product(1, Decimal::new(100, 0)), None);
    cart.clear();
    drop(cart);

    let restored = open_cart(&dir);
    assert!(restored.is_empty());
    assert_eq!(restored.total(), Decimal::ZERO);
}

#[test]
fn size_change_merge_survives_reload() {
    let dir = temp_storage_dir("vitrine-cart-size-merge");

    let mut cart = open_cart(&dir);
    let p = product(1, Decimal::new(19_990, 2));
    cart.add(&p, Some(40));
    cart.add(&p, Some(41));
    cart.set_size(ProductId::new(1), Some(40), Some(41));
    drop(cart);

    let restored = open_cart(&dir);
    assert_eq!(restored.lines().len(), 1);
    assert_eq!(restored.lines()[0].size, Some(41));
    assert_eq!(restored.lines()[0].qty, 2);
}

#[test]
fn corrupt_document_restores_as_empty() {
    let dir = temp_storage_dir("vitrine-cart-corrupt");

    // Seed a cart, then corrupt the document on disk behind the store's back
    let mut cart = open_cart(&dir);
    cart.add(&product(1, Decimal::new(100, 0)), None);
    drop(cart);

    let document_path = dir.join(format!("{DEFAULT_CART_STORAGE_KEY}.json"));
    fs::write(&document_path, "{{{{ nope").unwrap();

    let restored = open_cart(&dir);
    assert!(restored.is_empty());

    // The store is usable again and repairs the document on the next write
    let mut restored = restored;
    restored.add(&product(2, Decimal::new(100, 0)), Some(39));
    drop(restored);

    let healed = open_cart(&dir);
    assert_eq!(healed.count(), 1);
}

#[test]
fn persisted_document_layout() {
    let dir = temp_storage_dir("vitrine-cart-layout");

    let mut cart = open_cart(&dir);
    cart.add(&product(1, Decimal::new(19_990, 2)), Some(40));
    drop(cart);

    let document_path = dir.join(format!("{DEFAULT_CART_STORAGE_KEY}.json"));
    let raw = fs::read_to_string(&document_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let lines = value.as_array().unwrap();
    assert_eq!(lines.len(), 1);

    let line = &lines[0];
    assert_eq!(line["id"], 1);
    assert!(line["title"].is_string());
    assert!(line["price"].is_number());
    assert!(line["image"].is_string());
    assert_eq!(line["size"], 40);
    assert_eq!(line["qty"], 1);
}

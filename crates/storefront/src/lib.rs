//! Vitrine Storefront core library.
//!
//! This crate provides the stateful core behind a storefront UI: a
//! persisted shopping-cart store and a read-only product catalog client.
//! Page views (home, catalog, product detail, cart) are thin consumers that
//! read from these two components and render; they live in the embedding
//! application, not here.
//!
//! # Components
//!
//! - [`cart`] - The cart store: owns cart state, exposes mutation
//!   operations, persists to a key-value port on every change, and derives
//!   aggregate totals.
//! - [`catalog`] - Thin read-only client for the external product catalog
//!   API. No caching, no retry.
//! - [`storage`] - The durable key-value port the cart persists through,
//!   with file-backed and in-memory implementations.
//! - [`pricing`] - Derived display pricing (list price markup, PIX
//!   discount, installments) and BRL formatting.
//! - [`state`] - [`state::StoreContext`], the explicitly constructed
//!   context handed to views (no ambient globals).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod state;
pub mod storage;

pub use error::{Result, StoreError};

//! Vitrine Core - Shared types library.
//!
//! This crate provides common types used across all Vitrine components:
//! - `storefront` - The storefront core library (cart store, catalog client)
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

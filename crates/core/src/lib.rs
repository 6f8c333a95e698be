//! SwiftCart Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! catalog records fetched from the remote API and the cart state
//! they are copied into.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients, no persistence. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product, rating, id, and category-selection types
//! - [`cart`] - Cart entries and the ordered cart state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;

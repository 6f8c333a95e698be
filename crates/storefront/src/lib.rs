//! SwiftCart storefront library.
//!
//! The storefront is a client of a public REST catalog API. It renders
//! category pills, product grids, a detail modal, and a cart panel into the
//! named mount points of a [`document::Document`], and keeps the cart
//! mirrored to a local storage slot after every mutation.
//!
//! # Architecture
//!
//! - [`catalog`] - Remote catalog client (reqwest) behind the [`catalog::CatalogApi`] seam
//! - [`cart_store`] - Cart state persisted through a [`cart_store::CartStorage`] backend
//! - [`views`] - Pure rendering functions (askama templates)
//! - [`document`] - Named mount points the renderer writes into
//! - [`app`] - Interaction controller wiring user actions to the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart_store;
pub mod catalog;
pub mod config;
pub mod document;
pub mod filters;
pub mod views;

//! SwiftCart Storefront - client of a public product catalog.
//!
//! The binary boots the storefront the way a page load would: load the
//! persisted cart, fetch categories, products, and trending products, and
//! render everything into the page's mount points. The assembled page
//! snapshot is written to the configured output path.
//!
//! # Architecture
//!
//! - reqwest client for the catalog API (no retries; failed sections
//!   degrade to inline errors)
//! - Askama templates for rendering
//! - Cart persisted to a single JSON file, the local storage slot

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use swiftcart_storefront::app::App;
use swiftcart_storefront::cart_store::{CartStore, FileStorage};
use swiftcart_storefront::catalog::HttpCatalogClient;
use swiftcart_storefront::config::StorefrontConfig;
use swiftcart_storefront::document::Document;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "swiftcart_storefront=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    tracing::info!(api_url = %config.api_url, "configuration loaded");

    let cart = CartStore::load(Box::new(FileStorage::new(&config.cart_path)));
    let catalog = Arc::new(HttpCatalogClient::new(&config.api_url));

    let mut app = App::new(catalog, cart, Document::home());
    app.init().await;

    let page = app.page().expect("Failed to render page");
    std::fs::write(&config.out_path, page).expect("Failed to write page snapshot");
    tracing::info!(path = %config.out_path.display(), "storefront snapshot written");
}

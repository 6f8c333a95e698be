//! Pure rendering functions.
//!
//! Each function maps immutable snapshots of catalog data or cart state to
//! an HTML fragment; the controller decides which mount the fragment lands
//! in. Nothing here touches the network, the cart, or the document.

mod rating;

pub use rating::RatingStars;

use askama::Template;
use rust_decimal::Decimal;
use swiftcart_core::cart::CartState;
use swiftcart_core::types::{CategorySelection, Product};

use crate::document::{Document, MountId};
use crate::filters;

/// Rendering failure (template error).
pub type RenderError = askama::Error;

// =============================================================================
// Category pills
// =============================================================================

/// One category control in the pill row.
pub struct CategoryPill {
    pub label: String,
    /// Value carried by the control's `data-category` attribute;
    /// `"all"` for the sentinel pill.
    pub value: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "partials/category_pills.html")]
struct CategoryPillsTemplate {
    pills: Vec<CategoryPill>,
}

/// Render the category pill row: an "All" pill plus one per label, with
/// exactly the pill matching `selection` marked active.
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn category_pills(
    categories: &[String],
    selection: &CategorySelection,
) -> Result<String, RenderError> {
    let all = CategoryPill {
        label: "All".to_string(),
        value: "all".to_string(),
        active: selection.is_active(None),
    };
    let pills = std::iter::once(all)
        .chain(categories.iter().map(|label| CategoryPill {
            label: label.clone(),
            value: label.clone(),
            active: selection.is_active(Some(label)),
        }))
        .collect();

    CategoryPillsTemplate { pills }.render()
}

// =============================================================================
// Product grid & detail
// =============================================================================

/// Product display data for grid cards.
pub struct ProductCardView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub rate: f64,
    pub count: u64,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u64(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.image.clone(),
            rate: product.rating.rate,
            count: product.rating.count,
        }
    }
}

#[derive(Template)]
#[template(path = "partials/product_grid.html")]
struct ProductGridTemplate {
    cards: Vec<ProductCardView>,
}

/// Render a grid of product cards.
///
/// Cards reference products by `data-product-id` only; the controller keeps
/// the id-to-product lookup table for the add-to-cart action.
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn product_grid(products: &[Product]) -> Result<String, RenderError> {
    let cards = products.iter().map(ProductCardView::from).collect();
    ProductGridTemplate { cards }.render()
}

/// Product display data for the detail modal.
pub struct ProductDetailView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
    pub count: u64,
    /// Icon classes for the five star cells.
    pub stars: Vec<&'static str>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u64(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            count: product.rating.count,
            stars: RatingStars::from_rate(product.rating.rate).icons(),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/product_detail.html")]
struct ProductDetailTemplate {
    product: ProductDetailView,
}

/// Render the product detail view for the modal.
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn product_detail(product: &Product) -> Result<String, RenderError> {
    ProductDetailTemplate {
        product: ProductDetailView::from(product),
    }
    .render()
}

// =============================================================================
// Cart panel
// =============================================================================

/// Cart row display data.
pub struct CartItemView {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate {
    items: Vec<CartItemView>,
}

/// Render the cart panel rows, or the empty-state message when the cart
/// holds nothing.
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn cart_items(state: &CartState) -> Result<String, RenderError> {
    let items = state
        .entries()
        .iter()
        .map(|entry| CartItemView {
            id: entry.product.id.as_u64(),
            title: entry.product.title.clone(),
            image: entry.product.image.clone(),
            price: entry.product.price,
            quantity: entry.quantity,
        })
        .collect();

    CartItemsTemplate { items }.render()
}

#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u32,
}

/// Render the cart item count badge (hidden when the cart is empty).
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn cart_count(count: u32) -> Result<String, RenderError> {
    CartCountTemplate { count }.render()
}

/// Format the cart running total for its mount.
#[must_use]
pub fn cart_total(total: Decimal) -> String {
    format!("${total:.2}")
}

// =============================================================================
// Degraded states
// =============================================================================

/// Loading spinner shown while a fetch is in flight.
#[must_use]
pub const fn loading_spinner() -> &'static str {
    r#"<div class="col-span-full text-center py-20"><i class="fas fa-spinner fa-spin text-4xl text-blue-600"></i></div>"#
}

#[derive(Template)]
#[template(path = "partials/inline_error.html")]
struct InlineErrorTemplate<'a> {
    message: &'a str,
}

/// Inline error fragment shown in a mount whose fetch or render failed.
#[must_use]
pub fn inline_error(message: &str) -> String {
    InlineErrorTemplate { message }
        .render()
        .unwrap_or_else(|_| message.to_string())
}

// =============================================================================
// Full page
// =============================================================================

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    categories: &'a str,
    product_grid: &'a str,
    trending_grid: &'a str,
    modal_content: &'a str,
    cart_items: &'a str,
    cart_count: &'a str,
    cart_total: &'a str,
    modal_open: bool,
    cart_open: bool,
    menu_open: bool,
}

/// Assemble the full storefront page around the document's mounts.
///
/// # Errors
///
/// Returns a [`RenderError`] when template rendering fails.
pub fn page(
    document: &Document,
    modal_open: bool,
    cart_open: bool,
    menu_open: bool,
) -> Result<String, RenderError> {
    let content = |id| document.content(id).unwrap_or_default();

    PageTemplate {
        categories: content(MountId::Categories),
        product_grid: content(MountId::ProductGrid),
        trending_grid: content(MountId::TrendingGrid),
        modal_content: content(MountId::ModalContent),
        cart_items: content(MountId::CartItems),
        cart_count: content(MountId::CartCount),
        cart_total: content(MountId::CartTotal),
        modal_open,
        cart_open,
        menu_open,
    }
    .render()
}

//! Interaction controller.
//!
//! Wires user actions (category selection, add-to-cart, modal open/close,
//! cart panel toggles) to the catalog client and the cart store, and writes
//! every render through the document's mount points. All catalog errors are
//! converted into inline error fragments here; nothing propagates out of a
//! controller operation.
//!
//! # Stale responses
//!
//! The grid and the modal each carry a monotonically increasing epoch.
//! Initiating a fetch bumps the epoch and captures it; applying a result
//! compares the captured epoch against the current one and discards the
//! result when a later request has superseded it. There is no cancellation
//! for the in-flight request itself - discarding its response is the whole
//! guard.

use std::collections::HashMap;
use std::sync::Arc;

use swiftcart_core::types::{CategorySelection, Product, ProductId};
use tracing::{debug, error, info, instrument, warn};

use crate::cart_store::CartStore;
use crate::catalog::{CatalogApi, CatalogError};
use crate::document::{Document, MountId};
use crate::views;

const PRODUCTS_ERROR: &str = "Failed to load products.";
const TRENDING_ERROR: &str = "Failed to load trending products.";
const CATEGORIES_ERROR: &str = "Failed to load categories.";
const DETAIL_ERROR: &str = "Failed to load product details.";

/// How many products the trending section shows.
const TRENDING_LIMIT: u32 = 3;

/// State of the product detail modal.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    /// A detail fetch is in flight; previous content has been cleared.
    Loading,
    Loaded(Box<Product>),
    Failed(String),
}

/// The storefront controller.
///
/// Owns the cart store, the document, and all UI state; holds the catalog
/// behind its trait seam so tests can substitute a stub.
pub struct App {
    catalog: Arc<dyn CatalogApi>,
    cart: CartStore,
    document: Document,

    selection: CategorySelection,
    categories: Vec<String>,
    modal: ModalState,
    cart_open: bool,
    menu_open: bool,

    grid_epoch: u64,
    modal_epoch: u64,

    /// Id-to-product lookup for the products currently on screen. Actions
    /// in rendered markup carry only a `data-product-id`; this table turns
    /// the id back into the product snapshot the cart copies.
    product_index: HashMap<ProductId, Product>,
}

impl App {
    /// Create a controller over an already-loaded cart store.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogApi>, cart: CartStore, document: Document) -> Self {
        Self {
            catalog,
            cart,
            document,
            selection: CategorySelection::All,
            categories: Vec::new(),
            modal: ModalState::Closed,
            cart_open: false,
            menu_open: false,
            grid_epoch: 0,
            modal_epoch: 0,
            product_index: HashMap::new(),
        }
    }

    /// Startup flow: render cart-dependent mounts from the persisted state,
    /// then fetch whatever the page has mounts for. Each fetch degrades
    /// independently.
    pub async fn init(&mut self) {
        info!("storefront initializing");
        self.render_cart();

        if self.document.has(MountId::Categories) {
            self.refresh_categories().await;
        }
        if self.document.has(MountId::ProductGrid) {
            self.refresh_grid().await;
        }
        if self.document.has(MountId::TrendingGrid) {
            self.refresh_trending().await;
        }
    }

    // =========================================================================
    // Categories & product grid
    // =========================================================================

    /// Handle a category control click.
    ///
    /// Updates the selection (so exactly the clicked pill renders active)
    /// and refreshes the product grid scoped to it.
    #[instrument(skip(self))]
    pub async fn select_category(&mut self, label: &str) {
        self.selection = CategorySelection::from_label(label);
        debug!(selection = ?self.selection, "category selected");
        self.render_categories();
        self.refresh_grid().await;
    }

    async fn refresh_categories(&mut self) {
        match self.catalog.list_categories().await {
            Ok(categories) => {
                self.categories = categories;
                self.render_categories();
            }
            Err(e) => {
                error!(error = %e, "failed to fetch categories");
                self.document
                    .fill(MountId::Categories, views::inline_error(CATEGORIES_ERROR));
            }
        }
    }

    async fn refresh_grid(&mut self) {
        let epoch = self.begin_grid_request();
        let result = self
            .catalog
            .list_products(self.selection.filter(), None)
            .await;
        self.apply_grid_result(epoch, result);
    }

    async fn refresh_trending(&mut self) {
        let result = self.catalog.list_products(None, Some(TRENDING_LIMIT)).await;
        match result {
            Ok(products) => {
                self.index_products(&products);
                self.fill_rendered(MountId::TrendingGrid, views::product_grid(&products));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch trending products");
                self.document
                    .fill(MountId::TrendingGrid, views::inline_error(TRENDING_ERROR));
            }
        }
    }

    /// Start a grid request: bump the epoch, show the spinner.
    ///
    /// The returned epoch tags the request; pass it back to
    /// [`App::apply_grid_result`].
    pub fn begin_grid_request(&mut self) -> u64 {
        self.grid_epoch += 1;
        self.document
            .fill(MountId::ProductGrid, views::loading_spinner());
        self.grid_epoch
    }

    /// Apply the outcome of a grid request, unless a later request has
    /// superseded it.
    pub fn apply_grid_result(
        &mut self,
        epoch: u64,
        result: Result<Vec<Product>, CatalogError>,
    ) {
        if epoch != self.grid_epoch {
            debug!(epoch, current = self.grid_epoch, "discarding stale grid response");
            return;
        }

        match result {
            Ok(products) => {
                self.index_products(&products);
                self.fill_rendered(MountId::ProductGrid, views::product_grid(&products));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch products");
                self.document
                    .fill(MountId::ProductGrid, views::inline_error(PRODUCTS_ERROR));
            }
        }
    }

    // =========================================================================
    // Product detail modal
    // =========================================================================

    /// Open the detail modal for a product: Loading (previous content
    /// cleared) until the fetch settles into Loaded or Failed.
    #[instrument(skip(self))]
    pub async fn open_modal(&mut self, id: ProductId) {
        let epoch = self.begin_modal_request();
        let result = self.catalog.get_product(id).await;
        self.apply_modal_result(epoch, result);
    }

    /// Close the modal from any state. Also wired to backdrop clicks.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.document.clear(MountId::ModalContent);
    }

    /// Start a modal request: bump the epoch, clear previous content to a
    /// spinner, enter Loading.
    pub fn begin_modal_request(&mut self) -> u64 {
        self.modal_epoch += 1;
        self.modal = ModalState::Loading;
        self.document
            .fill(MountId::ModalContent, views::loading_spinner());
        self.modal_epoch
    }

    /// Apply the outcome of a modal request, unless superseded or the modal
    /// has been closed in the meantime.
    pub fn apply_modal_result(&mut self, epoch: u64, result: Result<Product, CatalogError>) {
        if epoch != self.modal_epoch {
            debug!(epoch, current = self.modal_epoch, "discarding stale modal response");
            return;
        }
        if self.modal == ModalState::Closed {
            debug!("modal closed while fetch was in flight, discarding response");
            return;
        }

        match result {
            Ok(product) => {
                self.product_index.insert(product.id, product.clone());
                self.fill_rendered(MountId::ModalContent, views::product_detail(&product));
                self.modal = ModalState::Loaded(Box::new(product));
            }
            Err(e) => {
                error!(error = %e, "failed to fetch product details");
                self.document
                    .fill(MountId::ModalContent, views::inline_error(DETAIL_ERROR));
                self.modal = ModalState::Failed(e.to_string());
            }
        }
    }

    // =========================================================================
    // Cart actions
    // =========================================================================

    /// Add one unit of the product with `id` to the cart and open the cart
    /// panel.
    ///
    /// The id must be on screen (grid, trending, or modal); unknown ids are
    /// ignored with a warning.
    pub fn add_to_cart(&mut self, id: ProductId) {
        let Some(product) = self.product_index.get(&id).cloned() else {
            warn!(%id, "add-to-cart for a product that is not on screen");
            return;
        };
        self.cart.add(product);
        self.render_cart();
        self.toggle_cart(Some(true));
    }

    /// Add to cart from the detail modal: same as [`App::add_to_cart`],
    /// then close the modal so the cart panel is not buried behind it.
    pub fn add_to_cart_from_modal(&mut self, id: ProductId) {
        self.add_to_cart(id);
        self.close_modal();
    }

    /// Remove the cart entry for `id`, if present.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
        self.render_cart();
    }

    /// Adjust the quantity of the cart entry for `id` by `delta`; driving
    /// it to 0 or below removes the entry.
    pub fn change_quantity(&mut self, id: ProductId, delta: i32) {
        self.cart.update_quantity(id, delta);
        self.render_cart();
    }

    /// Open, close, or (with `None`) flip the cart panel.
    pub fn toggle_cart(&mut self, show: Option<bool>) {
        self.cart_open = show.unwrap_or(!self.cart_open);
    }

    /// Flip the responsive navigation menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // =========================================================================
    // Rendering helpers & accessors
    // =========================================================================

    fn render_categories(&mut self) {
        self.fill_rendered(
            MountId::Categories,
            views::category_pills(&self.categories, &self.selection),
        );
    }

    fn render_cart(&mut self) {
        let state = self.cart.state();
        let items = views::cart_items(state);
        let count = views::cart_count(state.total_count());
        let total = views::cart_total(state.total_price());

        self.fill_rendered(MountId::CartItems, items);
        self.fill_rendered(MountId::CartCount, count);
        self.document.fill(MountId::CartTotal, total);
    }

    fn fill_rendered(&mut self, mount: MountId, rendered: Result<String, views::RenderError>) {
        match rendered {
            Ok(html) => {
                self.document.fill(mount, html);
            }
            Err(e) => {
                error!(error = %e, mount = ?mount, "template rendering failed");
                self.document
                    .fill(mount, views::inline_error("Something went wrong."));
            }
        }
    }

    fn index_products(&mut self, products: &[Product]) {
        for product in products {
            self.product_index.insert(product.id, product.clone());
        }
    }

    /// Assemble the full page snapshot from the current mounts and UI
    /// state.
    ///
    /// # Errors
    ///
    /// Returns a [`views::RenderError`] when template rendering fails.
    pub fn page(&self) -> Result<String, views::RenderError> {
        let modal_open = self.modal != ModalState::Closed;
        views::page(&self.document, modal_open, self.cart_open, self.menu_open)
    }

    /// The current modal state.
    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// The active category filter.
    #[must_use]
    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    /// The document and its mount contents.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the responsive navigation menu is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

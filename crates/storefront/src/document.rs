//! Named mount points the renderer writes into.
//!
//! The browser DOM is reduced to a [`Document`]: a fixed set of registered
//! mount points, each holding the HTML fragment most recently rendered into
//! it. Pages that lack a given container simply do not register that mount,
//! and filling an unregistered mount is a no-op - the same controller code
//! serves every page.

use std::collections::HashMap;

use tracing::debug;

/// The presentation targets a storefront page can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountId {
    /// Category pill row.
    Categories,
    /// Main product grid.
    ProductGrid,
    /// Trending products grid (landing page).
    TrendingGrid,
    /// Product detail modal body.
    ModalContent,
    /// Cart panel rows.
    CartItems,
    /// Cart item count badge.
    CartCount,
    /// Cart running total.
    CartTotal,
}

impl MountId {
    /// Every mount the full storefront page exposes.
    pub const ALL: [Self; 7] = [
        Self::Categories,
        Self::ProductGrid,
        Self::TrendingGrid,
        Self::ModalContent,
        Self::CartItems,
        Self::CartCount,
        Self::CartTotal,
    ];
}

/// A page's registered mount points and their current contents.
#[derive(Debug, Default)]
pub struct Document {
    mounts: HashMap<MountId, String>,
}

impl Document {
    /// A document with the given mounts registered, all empty.
    #[must_use]
    pub fn with_mounts(mounts: impl IntoIterator<Item = MountId>) -> Self {
        Self {
            mounts: mounts.into_iter().map(|id| (id, String::new())).collect(),
        }
    }

    /// The full storefront page: every mount registered.
    #[must_use]
    pub fn home() -> Self {
        Self::with_mounts(MountId::ALL)
    }

    /// Whether `id` is registered on this page.
    #[must_use]
    pub fn has(&self, id: MountId) -> bool {
        self.mounts.contains_key(&id)
    }

    /// Replace the contents of a mount.
    ///
    /// Returns `false` (and leaves the document untouched) when the mount
    /// is not registered on this page.
    pub fn fill(&mut self, id: MountId, html: impl Into<String>) -> bool {
        match self.mounts.get_mut(&id) {
            Some(slot) => {
                *slot = html.into();
                true
            }
            None => {
                debug!(mount = ?id, "mount not present on this page, skipping render");
                false
            }
        }
    }

    /// Empty a mount, if registered.
    pub fn clear(&mut self, id: MountId) {
        self.fill(id, String::new());
    }

    /// Current contents of a mount, if registered.
    #[must_use]
    pub fn content(&self, id: MountId) -> Option<&str> {
        self.mounts.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_registered_mount() {
        let mut doc = Document::home();
        assert!(doc.fill(MountId::ProductGrid, "<div>grid</div>"));
        assert_eq!(doc.content(MountId::ProductGrid), Some("<div>grid</div>"));
    }

    #[test]
    fn test_fill_absent_mount_is_noop() {
        // A page without a trending section.
        let mut doc = Document::with_mounts([MountId::ProductGrid, MountId::CartCount]);
        assert!(!doc.fill(MountId::TrendingGrid, "<div>t</div>"));
        assert_eq!(doc.content(MountId::TrendingGrid), None);
    }

    #[test]
    fn test_clear_empties_mount() {
        let mut doc = Document::home();
        doc.fill(MountId::ModalContent, "<p>detail</p>");
        doc.clear(MountId::ModalContent);
        assert_eq!(doc.content(MountId::ModalContent), Some(""));
    }
}

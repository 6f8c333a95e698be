//! Cart entries and the ordered cart state.
//!
//! `CartState` is pure in-memory state: no persistence, no rendering. The
//! storefront wraps it in a store that mirrors every mutation to local
//! storage.
//!
//! # Invariants
//!
//! - At most one entry per [`ProductId`] at any time.
//! - Every entry has `quantity >= 1`; driving a quantity to 0 or below
//!   removes the entry entirely.
//! - Insertion order is preserved for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// A product snapshot plus the quantity of it selected for purchase.
///
/// Serializes as the product fields with `quantity` alongside, which is the
/// shape the persisted cart slot holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line: quantity x unit price.
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered sequence of cart entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// An existing entry for the same id has its quantity incremented;
    /// otherwise a new entry with quantity 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry { product, quantity: 1 });
        }
    }

    /// Remove the entry matching `id`, if present.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != id);
        self.entries.len() != before
    }

    /// Adjust the quantity of the entry matching `id` by `delta`.
    ///
    /// No-op when no entry matches. A resulting quantity of 0 or below
    /// removes the entry, exactly as [`CartState::remove`] would.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == id) else {
            return false;
        };

        let updated = i64::from(entry.quantity) + i64::from(delta);
        if updated <= 0 {
            self.remove(id)
        } else {
            // Quantities fit comfortably in u32; `updated` is positive here.
            entry.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
            true
        }
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total item count: sum of all entry quantities.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Total price: sum of quantity x unit price over all entries.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            category: "electronics".to_string(),
            image: format!("https://example.test/{id}.jpg"),
            description: "A test product".to_string(),
            rating: Rating { rate: 4.1, count: 12 },
        }
    }

    #[test]
    fn test_add_new_product_appends_entry() {
        let mut cart = CartState::new();
        cart.add(product(1, Decimal::new(999, 2)));

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.total_count(), 1);
        assert_eq!(cart.total_price(), Decimal::new(999, 2));
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = CartState::new();
        cart.add(product(1, Decimal::new(999, 2)));
        cart.add(product(1, Decimal::new(999, 2)));

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);
        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_price(), Decimal::new(1998, 2));
    }

    #[test]
    fn test_no_duplicate_ids_over_mixed_operations() {
        let mut cart = CartState::new();
        for _ in 0..3 {
            cart.add(product(1, Decimal::new(100, 2)));
            cart.add(product(2, Decimal::new(250, 2)));
        }
        cart.update_quantity(ProductId::new(1), -1);
        cart.add(product(1, Decimal::new(100, 2)));
        cart.remove(ProductId::new(2));
        cart.add(product(2, Decimal::new(250, 2)));

        let mut ids: Vec<_> = cart.entries().iter().map(|e| e.product.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate product ids in cart");
    }

    #[test]
    fn test_totals_match_entry_sums() {
        let mut cart = CartState::new();
        cart.add(product(1, Decimal::new(1099, 2)));
        cart.add(product(1, Decimal::new(1099, 2)));
        cart.add(product(2, Decimal::new(595, 2)));

        let count: u32 = cart.entries().iter().map(|e| e.quantity).sum();
        let price: Decimal = cart.entries().iter().map(CartEntry::line_price).sum();
        assert_eq!(cart.total_count(), count);
        assert_eq!(cart.total_price(), price);
        assert_eq!(cart.total_price(), Decimal::new(2793, 2));
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut cart = CartState::new();
        cart.add(product(1, Decimal::new(100, 2)));

        assert!(!cart.remove(ProductId::new(42)));
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn test_update_quantity_missing_id_is_noop() {
        let mut cart = CartState::new();
        assert!(!cart.update_quantity(ProductId::new(1), 5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_to_zero_equals_remove() {
        let mut removed = CartState::new();
        removed.add(product(1, Decimal::new(100, 2)));
        removed.add(product(2, Decimal::new(200, 2)));
        removed.remove(ProductId::new(1));

        let mut updated = removed.clone();
        updated.add(product(1, Decimal::new(100, 2)));
        updated.update_quantity(ProductId::new(1), -1);
        assert_eq!(updated, removed);

        // Driving below zero behaves the same way.
        let mut below = CartState::new();
        below.add(product(1, Decimal::new(100, 2)));
        below.add(product(2, Decimal::new(200, 2)));
        below.update_quantity(ProductId::new(1), -7);
        assert_eq!(below, removed);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartState::new();
        cart.add(product(3, Decimal::ONE));
        cart.add(product(1, Decimal::ONE));
        cart.add(product(2, Decimal::ONE));
        cart.add(product(1, Decimal::ONE));

        let ids: Vec<u64> = cart.entries().iter().map(|e| e.product.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut cart = CartState::new();
        cart.add(product(1, Decimal::new(999, 2)));
        cart.add(product(2, Decimal::new(2550, 2)));
        cart.update_quantity(ProductId::new(2), 3);

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: CartState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}

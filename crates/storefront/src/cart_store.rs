//! Cart state mirrored to a local storage slot.
//!
//! The store owns a [`CartState`] and writes it through a [`CartStorage`]
//! backend after every mutation - no batching. Loading never fails: missing
//! or corrupt data falls back to an empty cart, and a failed save is logged
//! as a warning rather than surfaced (re-trying a save has nowhere better
//! to go).

use std::path::PathBuf;
use std::sync::Mutex;

use swiftcart_core::cart::CartState;
use swiftcart_core::types::{Product, ProductId};
use thiserror::Error;
use tracing::warn;

/// Errors from the persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot holds data that is not a valid serialized cart.
    #[error("corrupt cart data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A single string-keyed persistence slot.
///
/// Models browser-local storage: one slot, synchronous access, a single
/// writer by construction.
pub trait CartStorage: Send + Sync {
    /// Read the slot. `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot.
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

/// File-backed storage slot.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory storage slot, used by tests and demos.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().map_or(None, |slot| slot.clone()))
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(payload.to_string());
        }
        Ok(())
    }
}

/// The cart state plus its persistence backend.
pub struct CartStore {
    state: CartState,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Load the persisted cart, or start empty.
    ///
    /// Missing data is the normal first-run case; unreadable or unparsable
    /// data is absorbed with a warning. Loading never fails.
    pub fn load(storage: Box<dyn CartStorage>) -> Self {
        let state = match Self::read_state(storage.as_ref()) {
            Ok(Some(state)) => state,
            Ok(None) => CartState::new(),
            Err(e) => {
                warn!(error = %e, "failed to load persisted cart, starting empty");
                CartState::new()
            }
        };

        Self { state, storage }
    }

    fn read_state(storage: &dyn CartStorage) -> Result<Option<CartState>, StorageError> {
        let Some(payload) = storage.read()? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&payload)?))
    }

    /// Add one unit of `product` and persist.
    pub fn add(&mut self, product: Product) {
        self.state.add(product);
        self.persist();
    }

    /// Remove the entry matching `id`, if present, and persist.
    pub fn remove(&mut self, id: ProductId) {
        if self.state.remove(id) {
            self.persist();
        }
    }

    /// Adjust the quantity of the entry matching `id` by `delta` and
    /// persist. A quantity driven to 0 or below removes the entry.
    pub fn update_quantity(&mut self, id: ProductId, delta: i32) {
        if self.state.update_quantity(id, delta) {
            self.persist();
        }
    }

    /// The current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Total item count across all entries.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.state.total_count()
    }

    /// Total price across all entries.
    #[must_use]
    pub fn total_price(&self) -> rust_decimal::Decimal {
        self.state.total_price()
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.state) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.write(&payload) {
            warn!(error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use swiftcart_core::types::Rating;

    use super::*;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            category: "jewelery".to_string(),
            image: format!("https://example.test/{id}.jpg"),
            description: "A test product".to_string(),
            rating: Rating { rate: 2.5, count: 8 },
        }
    }

    /// Storage shared between two stores, standing in for the browser slot
    /// that outlives a page load.
    struct SharedStorage(std::sync::Arc<MemoryStorage>);

    impl CartStorage for SharedStorage {
        fn read(&self) -> Result<Option<String>, StorageError> {
            self.0.read()
        }
        fn write(&self, payload: &str) -> Result<(), StorageError> {
            self.0.write(payload)
        }
    }

    #[test]
    fn test_load_empty_slot_yields_empty_cart() {
        let store = CartStore::load(Box::new(MemoryStorage::new()));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_yields_empty_cart() {
        let storage = MemoryStorage::new();
        storage.write("{not json").expect("memory write");

        let store = CartStore::load(Box::new(storage));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_mutations_round_trip_through_storage() {
        let slot = std::sync::Arc::new(MemoryStorage::new());

        let mut store = CartStore::load(Box::new(SharedStorage(slot.clone())));
        store.add(product(1, Decimal::new(999, 2)));
        store.add(product(1, Decimal::new(999, 2)));
        store.add(product(2, Decimal::new(4900, 2)));
        store.update_quantity(ProductId::new(2), 2);
        let expected = store.state().clone();

        let reloaded = CartStore::load(Box::new(SharedStorage(slot)));
        assert_eq!(reloaded.state(), &expected);
        assert_eq!(reloaded.total_count(), 5);
        assert_eq!(reloaded.total_price(), Decimal::new(2 * 999 + 3 * 4900, 2));
    }

    #[test]
    fn test_noop_mutations_do_not_write() {
        // Mutations on absent ids leave the slot untouched.
        let slot = std::sync::Arc::new(MemoryStorage::new());
        let mut store = CartStore::load(Box::new(SharedStorage(slot.clone())));

        store.remove(ProductId::new(9));
        store.update_quantity(ProductId::new(9), 1);
        assert_eq!(slot.read().expect("memory read"), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "swiftcart-test-{}-{:?}.json",
            std::process::id(),
            std::thread::current().id()
        ));
        let storage = FileStorage::new(&path);

        assert_eq!(storage.read().expect("missing file is None"), None);
        storage.write("[]").expect("file write");
        assert_eq!(storage.read().expect("file read"), Some("[]".to_string()));

        std::fs::remove_file(&path).expect("cleanup");
    }
}

//! The session cart: ordered items, derived totals, durable persistence.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use super::item::CartItem;
use crate::errors::StoreError;
use crate::ui::Notify;

/// Read-only view of the cart, consistent at the moment it was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total_amount: u32,
    pub item_count: usize,
}

/// The client-held cart for the current session.
///
/// Items keep insertion order; the order drives display and index-based
/// removal. `total_amount` and `item_count` are recomputed eagerly on every
/// mutation, so they are always consistent with `items` by the time a
/// mutating call returns. After every mutation the full item sequence is
/// written to the cart file; on construction any previously persisted
/// sequence is loaded back. Malformed or missing data on load means an empty
/// cart, never an error.
pub struct CartStore {
    path: PathBuf,
    items: Vec<CartItem>,
    total_amount: u32,
    item_count: usize,
    notify: Arc<dyn Notify>,
}

impl CartStore {
    /// Open the cart backed by `path`, rehydrating any persisted items.
    pub fn open(path: PathBuf, notify: Arc<dyn Notify>) -> Self {
        let items = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<CartItem>>(&content) {
                Ok(items) => items,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed cart file");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        let mut store = Self {
            path,
            items,
            total_amount: 0,
            item_count: 0,
            notify,
        };
        store.recompute();
        store
    }

    /// Append a configured pizza. Identical configurations are never merged;
    /// each add is its own entry.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), StoreError> {
        self.items.push(item);
        self.recompute();
        self.persist()?;
        self.notify.success("Pizza added to cart!");
        Ok(())
    }

    /// Remove the entry at `index`, keeping the relative order of the rest.
    /// An out-of-bounds index is a no-op.
    pub fn remove_item(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.items.len() {
            return Ok(());
        }
        self.items.remove(index);
        self.recompute();
        self.persist()?;
        self.notify.info("Item removed from cart");
        Ok(())
    }

    /// Empty the cart. Both derived values drop to zero.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.items.clear();
        self.recompute();
        self.persist()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_amount(&self) -> u32 {
        self.total_amount
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consistent read-only view of items and derived totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_amount: self.total_amount,
            item_count: self.item_count,
        }
    }

    fn recompute(&mut self) {
        self.total_amount = self.items.iter().map(|i| i.total_price).sum();
        self.item_count = self.items.len();
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.items).map_err(|source| {
            StoreError::SerializeFailed {
                what: "cart",
                source,
            }
        })?;
        std::fs::write(&self.path, &json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(items = self.item_count, total = self.total_amount, "cart persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Ingredient;
    use crate::ui::notify::RecordingNotifier;
    use tempfile::tempdir;

    fn ingredient(id: &str, price: u32) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            price,
        }
    }

    fn pizza(base_price: u32) -> CartItem {
        CartItem::new(
            ingredient("thin", base_price),
            ingredient("tomato", 39),
            ingredient("mozzarella", 69),
            vec![],
        )
    }

    fn make_store() -> (CartStore, Arc<RecordingNotifier>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CartStore::open(dir.path().join("cart.json"), notifier.clone());
        (store, notifier, dir)
    }

    #[test]
    fn test_new_store_is_empty() {
        let (store, _, _dir) = make_store();
        assert!(store.is_empty());
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let (mut store, _, _dir) = make_store();

        store.add_item(pizza(100)).unwrap();
        assert_eq!(store.total_amount(), 208);
        assert_eq!(store.item_count(), 1);

        store.add_item(pizza(200)).unwrap();
        assert_eq!(store.total_amount(), 208 + 308);
        assert_eq!(store.item_count(), 2);

        store.remove_item(0).unwrap();
        assert_eq!(store.total_amount(), 308);
        assert_eq!(store.item_count(), 1);

        store.clear().unwrap();
        assert_eq!(store.total_amount(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_total_is_sum_of_remaining_snapshots() {
        let (mut store, _, _dir) = make_store();
        for price in [100, 150, 200] {
            store.add_item(pizza(price)).unwrap();
        }
        let expected: u32 = store.items().iter().map(|i| i.total_price).sum();
        assert_eq!(store.total_amount(), expected);
    }

    #[test]
    fn test_identical_configurations_are_not_merged() {
        let (mut store, _, _dir) = make_store();
        store.add_item(pizza(100)).unwrap();
        store.add_item(pizza(100)).unwrap();
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total_amount(), 416);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let (mut store, _, _dir) = make_store();
        for price in [100, 150, 200] {
            store.add_item(pizza(price)).unwrap();
        }
        store.remove_item(1).unwrap();
        assert_eq!(store.items()[0].base.price, 100);
        assert_eq!(store.items()[1].base.price, 200);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let (mut store, notifier, _dir) = make_store();
        store.add_item(pizza(100)).unwrap();
        let before = store.snapshot();

        store.remove_item(1).unwrap();
        store.remove_item(99).unwrap();

        assert_eq!(store.snapshot(), before);
        // No removal signal was emitted for the no-ops
        let removals = notifier
            .messages()
            .iter()
            .filter(|(kind, _)| *kind == "info")
            .count();
        assert_eq!(removals, 0);
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let (mut store, _, _dir) = make_store();
        store.remove_item(0).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_persist_reload_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let notifier = Arc::new(RecordingNotifier::new());

        let mut store = CartStore::open(path.clone(), notifier.clone());
        store.add_item(pizza(100)).unwrap();
        store
            .add_item(CartItem::new(
                ingredient("thick", 120),
                ingredient("pesto", 59),
                ingredient("cheddar", 79),
                vec![ingredient("onion", 20)],
            ))
            .unwrap();
        let before = store.snapshot();
        let bytes_before = std::fs::read(&path).unwrap();

        let reloaded = CartStore::open(path.clone(), notifier);
        assert_eq!(reloaded.snapshot(), before);

        // Re-persisting the reloaded sequence is byte-for-byte identical
        reloaded.persist().unwrap();
        let bytes_after = std::fs::read(&path).unwrap();
        assert_eq!(bytes_before, bytes_after);
    }

    #[test]
    fn test_malformed_cart_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = CartStore::open(path, Arc::new(RecordingNotifier::new()));
        assert!(store.is_empty());
        assert_eq!(store.total_amount(), 0);
    }

    #[test]
    fn test_missing_cart_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = CartStore::open(
            dir.path().join("does-not-exist.json"),
            Arc::new(RecordingNotifier::new()),
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_remove_emit_signals() {
        let (mut store, notifier, _dir) = make_store();
        store.add_item(pizza(100)).unwrap();
        store.remove_item(0).unwrap();
        assert_eq!(
            notifier.messages(),
            vec![
                ("success", "Pizza added to cart!".to_string()),
                ("info", "Item removed from cart".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_persists_empty_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let notifier = Arc::new(RecordingNotifier::new());

        let mut store = CartStore::open(path.clone(), notifier.clone());
        store.add_item(pizza(100)).unwrap();
        store.clear().unwrap();

        let reloaded = CartStore::open(path, notifier);
        assert!(reloaded.is_empty());
    }
}

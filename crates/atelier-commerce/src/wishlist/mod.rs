//! Visitor wishlist with durable persistence.

use atelier_store::KeyValueStore;
use tracing::warn;

use crate::catalog::{Product, ProductId};

/// Storage key the wishlist persists under.
pub const WISHLIST_KEY: &str = "atelier-wishlist";

/// The set of products a visitor has marked as favorites.
///
/// Entries are full product snapshots keyed by id, kept in insertion
/// order with no duplicates. Every mutation writes the whole collection
/// through to the backing store; write failures are logged and
/// swallowed, since the wishlist is a convenience, not a record of
/// truth. When several sessions share one store, last write wins.
#[derive(Debug)]
pub struct Wishlist<S: KeyValueStore> {
    items: Vec<Product>,
    store: S,
}

impl<S: KeyValueStore> Wishlist<S> {
    /// Load the wishlist from `store`.
    ///
    /// A missing slot starts empty; so does a corrupt one, since a
    /// broken wishlist must never block the page.
    pub fn open(store: S) -> Self {
        let items = match store.get::<Vec<Product>>(WISHLIST_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not load wishlist, starting empty");
                Vec::new()
            }
        };
        Self { items, store }
    }

    /// Add a product. Adding an id that is already present is a no-op,
    /// not an error.
    pub fn add(&mut self, product: &Product) {
        if self.contains(product.id) {
            return;
        }
        self.items.push(product.clone());
        self.save();
    }

    /// Remove the entry with `id`. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() != before {
            self.save();
        }
    }

    /// Flip membership for `product`.
    ///
    /// Returns `true` when the product is now on the wishlist and
    /// `false` when it was just removed, so the heart control can
    /// render feedback without a second lookup.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            self.remove(product.id);
            false
        } else {
            self.add(product);
            true
        }
    }

    /// Membership query.
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Best-effort write-through of the full collection.
    fn save(&self) {
        if let Err(e) = self.store.set(WISHLIST_KEY, &self.items) {
            warn!(error = %e, "could not persist wishlist");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::MemoryStore;

    fn product(id: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Piece {}", id),
            category: "corset".to_string(),
            category_name: "Corset".to_string(),
            price: 45_000,
            original_price: None,
            images: vec!["/assets/piece.jpg".to_string()],
            rating: 4.8,
            reviews: 22,
            is_new: false,
            is_bestseller: false,
            description: "Handcrafted corset.".to_string(),
            sizes: vec!["S".to_string()],
            colors: vec!["Ivory".to_string()],
            in_stock: true,
            stock_count: None,
            tags: vec!["lace".to_string()],
        }
    }

    #[test]
    fn test_add_and_membership() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);

        assert!(wishlist.is_empty());
        wishlist.add(&product(1));
        assert!(wishlist.contains(ProductId::new(1)));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);

        wishlist.add(&product(1));
        wishlist.add(&product(1));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);

        wishlist.remove(ProductId::new(42));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);

        wishlist.add(&product(3));
        wishlist.add(&product(1));
        wishlist.add(&product(2));

        let ids: Vec<u32> = wishlist.items().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_reports_membership() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);
        let piece = product(1);

        assert!(wishlist.toggle(&piece));
        assert!(wishlist.contains(piece.id));
        assert!(!wishlist.toggle(&piece));
        assert!(!wishlist.contains(piece.id));
    }

    #[test]
    fn test_double_toggle_restores_persisted_state() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);
        wishlist.add(&product(1));

        let before: Option<Vec<Product>> = store.get(WISHLIST_KEY).unwrap();
        let piece = product(2);
        wishlist.toggle(&piece);
        wishlist.toggle(&piece);
        let after: Option<Vec<Product>> = store.get(WISHLIST_KEY).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_reopening_reproduces_entries() {
        let store = MemoryStore::new();
        {
            let mut wishlist = Wishlist::open(&store);
            wishlist.add(&product(1));
            wishlist.add(&product(5));
        }

        let reopened = Wishlist::open(&store);
        assert_eq!(reopened.len(), 2);
        assert!(reopened.contains(ProductId::new(1)));
        assert!(reopened.contains(ProductId::new(5)));
    }

    #[test]
    fn test_corrupt_slot_degrades_to_empty() {
        let store = MemoryStore::new();
        store.set_raw(WISHLIST_KEY, b"{ definitely not json").unwrap();

        let wishlist = Wishlist::open(&store);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_clear_empties_store_too() {
        let store = MemoryStore::new();
        let mut wishlist = Wishlist::open(&store);
        wishlist.add(&product(1));
        wishlist.clear();

        let persisted: Option<Vec<Product>> = store.get(WISHLIST_KEY).unwrap();
        assert_eq!(persisted, Some(Vec::new()));
    }
}

//! Wishlist store.

use crate::events::{EventBus, StoreEvent};
use crate::store::Cache;
use crate::SessionError;
use std::sync::Arc;

/// Store key holding the wishlisted product ids.
pub const WISHLIST_KEY: &str = "market_street_wishlist";

/// Wishlist of product ids, in the order they were added.
///
/// Every write emits [`StoreEvent::WishlistUpdated`].
#[derive(Debug, Clone)]
pub struct WishlistStore {
    cache: Cache,
    events: Arc<EventBus>,
}

impl WishlistStore {
    pub fn new(cache: Cache, events: Arc<EventBus>) -> Self {
        Self { cache, events }
    }

    /// Wishlisted product ids.
    pub fn ids(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.cache.load(WISHLIST_KEY)?.unwrap_or_default())
    }

    pub fn contains(&self, product_id: &str) -> Result<bool, SessionError> {
        Ok(self.ids()?.iter().any(|id| id == product_id))
    }

    /// Add a product. Adding a present id changes nothing.
    pub fn add(&self, product_id: &str) -> Result<(), SessionError> {
        let mut ids = self.ids()?;
        if ids.iter().any(|id| id == product_id) {
            return Ok(());
        }
        ids.push(product_id.to_string());
        self.save(ids)
    }

    /// Remove a product. Returns whether it was present.
    pub fn remove(&self, product_id: &str) -> Result<bool, SessionError> {
        let mut ids = self.ids()?;
        let before = ids.len();
        ids.retain(|id| id != product_id);
        if ids.len() == before {
            return Ok(false);
        }
        self.save(ids)?;
        Ok(true)
    }

    /// Add the product if absent, remove it otherwise.
    ///
    /// Returns whether the product is wishlisted afterwards.
    pub fn toggle(&self, product_id: &str) -> Result<bool, SessionError> {
        if self.remove(product_id)? {
            return Ok(false);
        }
        self.add(product_id)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.save(Vec::new())
    }

    fn save(&self, ids: Vec<String>) -> Result<(), SessionError> {
        self.cache.set(WISHLIST_KEY, &ids)?;
        self.events.emit(&StoreEvent::WishlistUpdated(ids));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn store() -> (WishlistStore, Arc<Mutex<Vec<Vec<String>>>>) {
        let events = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        events.subscribe(move |e| {
            if let StoreEvent::WishlistUpdated(ids) = e {
                sink.lock().unwrap().push(ids.clone());
            }
        });
        (WishlistStore::new(Cache::in_memory(), events), seen)
    }

    #[test]
    fn test_add_keeps_order_and_ignores_duplicates() {
        let (wishlist, seen) = store();
        wishlist.add("women-dresses-2").unwrap();
        wishlist.add("men-shoes-1").unwrap();
        wishlist.add("women-dresses-2").unwrap();

        assert_eq!(wishlist.ids().unwrap(), vec!["women-dresses-2", "men-shoes-1"]);
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_toggle() {
        let (wishlist, seen) = store();
        assert!(wishlist.toggle("kids-girls-tops-1").unwrap());
        assert!(wishlist.contains("kids-girls-tops-1").unwrap());
        assert!(!wishlist.toggle("kids-girls-tops-1").unwrap());
        assert!(!wishlist.contains("kids-girls-tops-1").unwrap());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (wishlist, _) = store();
        wishlist.add("a").unwrap();
        wishlist.add("b").unwrap();

        assert!(wishlist.remove("a").unwrap());
        assert!(!wishlist.remove("a").unwrap());
        wishlist.clear().unwrap();
        assert!(wishlist.ids().unwrap().is_empty());
    }

    #[test]
    fn test_corrupted_wishlist_reads_empty() {
        let cache = Cache::in_memory();
        cache.raw().set(WISHLIST_KEY, "not json").unwrap();
        let wishlist = WishlistStore::new(cache, Arc::new(EventBus::new()));
        assert!(wishlist.ids().unwrap().is_empty());
    }
}

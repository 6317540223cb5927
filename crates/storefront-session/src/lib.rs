//! Shopper session state for the Market Street storefront.
//!
//! Cart, wishlist and signed-in user are kept in a [`KeyValueStore`] as JSON,
//! and every write is announced on an [`EventBus`] so views can refresh.
//!
//! # Example
//!
//! ```rust
//! use storefront_session::prelude::*;
//!
//! let session = Session::in_memory();
//! session.events().subscribe(|event| println!("{}", event.name()));
//!
//! session.wishlist().toggle("women-dresses-3")?;
//! assert_eq!(session.wishlist().ids()?, vec!["women-dresses-3"]);
//! # Ok::<(), SessionError>(())
//! ```

mod error;

pub mod auth;
pub mod cart;
pub mod events;
pub mod store;
pub mod wishlist;

use std::sync::Arc;

pub use auth::{AuthStore, LoyaltyStatus, User, UserPatch};
pub use cart::{CartItem, CartStore, MAX_QUANTITY_PER_ITEM};
pub use error::SessionError;
pub use events::{EventBus, StoreEvent, Subscription};
pub use store::{Cache, KeyValueStore, MemoryStore};
pub use wishlist::WishlistStore;

/// One shopper's stores, sharing a cache and an event bus.
#[derive(Debug, Clone)]
pub struct Session {
    cache: Cache,
    events: Arc<EventBus>,
}

impl Session {
    /// Create a session over a cache.
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Session backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Cache::in_memory())
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn cart(&self) -> CartStore {
        CartStore::new(self.cache.clone(), Arc::clone(&self.events))
    }

    pub fn wishlist(&self) -> WishlistStore {
        WishlistStore::new(self.cache.clone(), Arc::clone(&self.events))
    }

    pub fn auth(&self) -> AuthStore {
        AuthStore::new(self.cache.clone(), Arc::clone(&self.events))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AuthStore, Cache, CartItem, CartStore, EventBus, KeyValueStore, MemoryStore, Session,
        SessionError, StoreEvent, User, UserPatch, WishlistStore,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_stores_share_cache_and_events() {
        let session = Session::in_memory();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        session
            .events()
            .subscribe(move |e| sink.lock().unwrap().push(e.name()));

        session.wishlist().add("men-shoes-4").unwrap();
        assert!(session.wishlist().contains("men-shoes-4").unwrap());

        session
            .auth()
            .login(User::new("u-9", "Sam", "Lee", "sam@example.com"), false)
            .unwrap();
        session.cart().clear().unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["wishlistUpdated", "userLoggedIn", "cartUpdated"]
        );
        assert_eq!(
            session.cache().keys().unwrap(),
            vec!["market_street_cart", "market_street_user", "market_street_wishlist"]
        );
    }
}

//! Change notifications for the session stores.

use crate::auth::User;
use crate::cart::CartItem;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// An event emitted after a store write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "camelCase")]
pub enum StoreEvent {
    /// The cart changed; carries the full item list.
    CartUpdated(Vec<CartItem>),
    /// An item was added to the cart.
    #[serde(rename_all = "camelCase")]
    ItemAddedToCart {
        product_id: String,
        item: CartItem,
        /// False when the add merged into an existing line.
        is_new_item: bool,
    },
    /// The wishlist changed; carries the product ids.
    WishlistUpdated(Vec<String>),
    /// A user signed in.
    UserLoggedIn(User),
    /// The user signed out.
    UserLoggedOut,
}

impl StoreEvent {
    /// Event name as seen by listeners.
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::CartUpdated(_) => "cartUpdated",
            StoreEvent::ItemAddedToCart { .. } => "itemAddedToCart",
            StoreEvent::WishlistUpdated(_) => "wishlistUpdated",
            StoreEvent::UserLoggedIn(_) => "userLoggedIn",
            StoreEvent::UserLoggedOut => "userLoggedOut",
        }
    }
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Synchronous broadcast of [`StoreEvent`]s.
///
/// Listeners run on the emitting thread, in subscription order.
#[derive(Default)]
pub struct EventBus {
    listeners: Mutex<Listeners>,
}

impl EventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every event.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let mut listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != subscription.0);
        listeners.entries.len() < before
    }

    /// Deliver an event to every listener.
    pub fn emit(&self, event: &StoreEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while handling.
        let snapshot: Vec<Listener> = match self.listeners.lock() {
            Ok(guard) => guard.entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(poisoned) => poisoned
                .into_inner()
                .entries
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect(),
        };
        tracing::trace!(event = event.name(), listeners = snapshot.len(), "Emitting store event");
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        match self.listeners.lock() {
            Ok(guard) => guard.entries.len(),
            Err(poisoned) => poisoned.into_inner().entries.len(),
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

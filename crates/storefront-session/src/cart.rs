//! Shopping cart store.

use crate::events::{EventBus, StoreEvent};
use crate::store::Cache;
use crate::SessionError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_catalog::catalog::Product;
use storefront_catalog::ids::ProductId;
use storefront_catalog::money::{Currency, Money};
use tracing::debug;

/// Store key holding the cart lines.
pub const CART_KEY: &str = "market_street_cart";

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// One cart line: a product in a given size and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line id, unique per product + size + color.
    pub id: String,
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    /// Unit price.
    pub price: Money,
    pub image: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: i64,
}

impl CartItem {
    /// Build a line for a product.
    pub fn from_product(
        product: &Product,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        Self {
            id: line_id(&product.id, size, color),
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            image: product.image.clone(),
            size: size.map(str::to_string),
            color: color.map(str::to_string),
            quantity,
        }
    }

    /// Unit price times quantity, None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(self.quantity)
    }
}

/// Line id for a product in a size and color, e.g. `men-shirts-2-navy-M-Navy`.
pub fn line_id(product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> String {
    let mut id = product_id.to_string();
    for part in [size, color].into_iter().flatten() {
        id.push('-');
        id.push_str(part);
    }
    id
}

/// Cart persisted under [`CART_KEY`].
///
/// Every write emits [`StoreEvent::CartUpdated`] with the full line list.
#[derive(Debug, Clone)]
pub struct CartStore {
    cache: Cache,
    events: Arc<EventBus>,
}

impl CartStore {
    /// Create a cart store over a cache and event bus.
    pub fn new(cache: Cache, events: Arc<EventBus>) -> Self {
        Self { cache, events }
    }

    /// Current cart lines. Unreadable stored data reads as an empty cart.
    pub fn items(&self) -> Result<Vec<CartItem>, SessionError> {
        Ok(self.cache.load(CART_KEY)?.unwrap_or_default())
    }

    /// Add a product to the cart.
    ///
    /// Adding the same product, size and color again increases that line's
    /// quantity. Returns the resulting line.
    pub fn add(
        &self,
        product: &Product,
        quantity: i64,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Result<CartItem, SessionError> {
        if quantity <= 0 {
            return Err(SessionError::InvalidQuantity(quantity));
        }

        let mut items = self.items()?;
        let id = line_id(&product.id, size, color);

        let (item, is_new_item) = match items.iter_mut().find(|i| i.id == id) {
            Some(existing) => {
                let new_quantity = existing.quantity.saturating_add(quantity);
                if new_quantity > MAX_QUANTITY_PER_ITEM {
                    return Err(SessionError::QuantityExceedsLimit(
                        new_quantity,
                        MAX_QUANTITY_PER_ITEM,
                    ));
                }
                existing.quantity = new_quantity;
                (existing.clone(), false)
            }
            None => {
                if quantity > MAX_QUANTITY_PER_ITEM {
                    return Err(SessionError::QuantityExceedsLimit(
                        quantity,
                        MAX_QUANTITY_PER_ITEM,
                    ));
                }
                let item = CartItem::from_product(product, quantity, size, color);
                items.push(item.clone());
                (item, true)
            }
        };

        debug!(line = %item.id, quantity = item.quantity, is_new_item, "Added to cart");
        self.save(&items)?;
        self.events.emit(&StoreEvent::ItemAddedToCart {
            product_id: product.id.to_string(),
            item: item.clone(),
            is_new_item,
        });
        Ok(item)
    }

    /// Set a line's quantity. Zero or less removes the line.
    pub fn update_quantity(&self, line_id: &str, quantity: i64) -> Result<(), SessionError> {
        if quantity <= 0 {
            self.remove(line_id)?;
            return Ok(());
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(SessionError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let mut items = self.items()?;
        let item = items
            .iter_mut()
            .find(|i| i.id == line_id)
            .ok_or_else(|| SessionError::ItemNotInCart(line_id.to_string()))?;
        item.quantity = quantity;
        self.save(&items)
    }

    /// Remove a line. Returns whether it was present.
    pub fn remove(&self, line_id: &str) -> Result<bool, SessionError> {
        let mut items = self.items()?;
        let before = items.len();
        items.retain(|i| i.id != line_id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.save(&[])
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> Result<i64, SessionError> {
        Ok(self.items()?.iter().map(|i| i.quantity).sum())
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Result<Money, SessionError> {
        let items = self.items()?;
        let currency = items
            .first()
            .map_or(Currency::USD, |item| item.price.currency);
        let totals = items
            .iter()
            .map(CartItem::line_total)
            .collect::<Option<Vec<Money>>>()
            .ok_or_else(|| SessionError::Store("cart line total overflow".to_string()))?;
        Money::try_sum(totals.iter(), currency)
            .ok_or_else(|| SessionError::Store("cart subtotal overflow or mixed currency".to_string()))
    }

    fn save(&self, items: &[CartItem]) -> Result<(), SessionError> {
        self.cache.set(CART_KEY, items)?;
        self.events.emit(&StoreEvent::CartUpdated(items.to_vec()));
        Ok(())
    }
}

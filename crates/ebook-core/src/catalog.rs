//! # Catalog
//!
//! Owns every listed [`EbookItem`] and hands out [`ItemId`] handles.
//!
//! Carts and orders never hold references into the catalog. A cart keeps
//! handles; checkout looks each handle up here and copies the item by value
//! into the order. That is what keeps a placed order immune to later
//! discounts.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountRate, EbookItem, ItemId};

/// Listed items in registration order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<(ItemId, EbookItem)>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Lists an item and returns its new handle.
    ///
    /// Every call issues a distinct handle, even for an item whose fields
    /// match one already listed.
    pub fn add(&mut self, item: EbookItem) -> ItemId {
        let id = ItemId::new();
        debug!(item_id = %id, title = %item.title(), price = %item.price(), "Listing item");
        self.items.push((id, item));
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&EbookItem> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut EbookItem> {
        self.items
            .iter_mut()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, item)| item)
    }

    /// Discounts one listed item and returns its new price.
    pub fn apply_discount(&mut self, id: ItemId, rate: DiscountRate) -> CoreResult<Money> {
        let item = self
            .get_mut(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        item.apply_discount(rate);
        debug!(item_id = %id, discount_bps = rate.bps(), price = %item.price(), "Discount applied");
        Ok(item.price())
    }

    /// Delists an item. Carts still holding the handle will fail checkout.
    pub fn remove(&mut self, id: ItemId) -> Option<EbookItem> {
        let index = self.items.iter().position(|(item_id, _)| *item_id == id)?;
        debug!(item_id = %id, "Delisting item");
        Some(self.items.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &EbookItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }
}

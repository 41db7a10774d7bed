//! User actions a view can hand back to the shell.

use serde::{Deserialize, Serialize};
use tracing::info;

use plantshop_cart::{CartEnvelope, CartStore};
use plantshop_catalog::Catalog;
use plantshop_core::ProductId;
use plantshop_events::EventBus;

use crate::error::StorefrontResult;

/// A dispatchable request produced by a view, e.g. "add product 3".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "product_id", rename_all = "snake_case")]
pub enum ViewAction {
    Add(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    /// Checkout is a stub: it is accepted and logged, and changes nothing.
    Checkout,
}

impl ViewAction {
    /// Run the action against the store. Returns whether the cart changed.
    ///
    /// Only `Add` can fail, when the id does not name a catalog product.
    pub fn dispatch<B>(&self, catalog: &Catalog, store: &mut CartStore<B>) -> StorefrontResult<bool>
    where
        B: EventBus<CartEnvelope>,
    {
        let changed = match *self {
            ViewAction::Add(id) => store.add(catalog.require(id)?),
            ViewAction::Increase(id) => store.increase(id),
            ViewAction::Decrease(id) => store.decrease(id),
            ViewAction::Remove(id) => store.remove(id),
            ViewAction::Checkout => {
                let cart = store.cart();
                info!(
                    total_items = cart.total_items(),
                    total_cost = %cart.total_cost(),
                    "checkout requested but not available yet"
                );
                false
            }
        };
        Ok(changed)
    }
}

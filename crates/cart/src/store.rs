//! Single-writer container for the live cart.

use tracing::{debug, trace, warn};

use plantshop_catalog::Product;
use plantshop_core::{AggregateRoot, ProductId};
use plantshop_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription, execute};

use crate::cart::{Cart, CartCommand, CartEvent};

/// Envelope published to store subscribers after each applied change.
pub type CartEnvelope = EventEnvelope<CartEvent>;

/// Owns the cart and exposes only the four cart transitions.
///
/// Transitions take `&mut self`, so there is exactly one writer and every
/// transition completes before the next starts. Readers borrow the cart via
/// [`CartStore::cart`] and only ever see fully applied state. Subscribers are
/// notified after the state update, never during it.
#[derive(Debug)]
pub struct CartStore<B = InMemoryEventBus<CartEnvelope>> {
    cart: Cart,
    bus: B,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_bus(InMemoryEventBus::new())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> CartStore<B>
where
    B: EventBus<CartEnvelope>,
{
    pub fn with_bus(bus: B) -> Self {
        Self {
            cart: Cart::empty(),
            bus,
        }
    }

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Receive an envelope for every change applied from now on.
    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.bus.subscribe()
    }

    /// Add `product` with quantity 1 unless it is already in the cart.
    pub fn add(&mut self, product: &Product) -> bool {
        self.dispatch(CartCommand::add(product.clone()))
    }

    /// Increment the quantity of `product_id`, if present.
    pub fn increase(&mut self, product_id: ProductId) -> bool {
        self.dispatch(CartCommand::increase(product_id))
    }

    /// Decrement the quantity of `product_id` while it stays at or above 1.
    pub fn decrease(&mut self, product_id: ProductId) -> bool {
        self.dispatch(CartCommand::decrease(product_id))
    }

    /// Delete the entry for `product_id`, if present.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        self.dispatch(CartCommand::remove(product_id))
    }

    /// Returns whether the cart changed.
    fn dispatch(&mut self, command: CartCommand) -> bool {
        let events = match execute(&mut self.cart, &command) {
            Ok(events) => events,
            Err(never) => match never {},
        };

        if events.is_empty() {
            trace!(?command, "cart command was a no-op");
            return false;
        }

        let first_sequence = self.cart.version() - events.len() as u64;
        for (offset, event) in events.into_iter().enumerate() {
            debug!(
                event_type = event.event_type(),
                product_id = %event.product_id(),
                total_items = self.cart.total_items(),
                "cart updated"
            );

            let sequence_number = first_sequence + offset as u64 + 1;
            let envelope = EventEnvelope::new(Cart::AGGREGATE_TYPE, sequence_number, event);
            if let Err(error) = self.bus.publish(envelope) {
                warn!(?error, sequence_number, "failed to notify cart subscribers");
            }
        }

        true
    }
}

//! Cart domain module.
//!
//! The cart is a small aggregate over an ordered list of entries, driven by
//! four total transitions (add, increase, decrease, remove). `CartStore` is
//! the single owner of the live cart and notifies subscribers after each
//! applied change.

pub mod cart;
pub mod store;

pub use cart::{
    AddToCart, Cart, CartCommand, CartEntry, CartEvent, DecreaseQuantity, IncreaseQuantity,
    ItemAdded, ItemRemoved, QuantityDecreased, QuantityIncreased, RemoveFromCart,
};
pub use store::{CartEnvelope, CartStore};

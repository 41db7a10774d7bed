//! `plantshop-storefront`
//!
//! **Responsibility:** the three storefront views, the route table that picks
//! one of them, and the shell that owns the cart store and renders the header.
//!
//! Views are plain display models built from the catalog and the cart, so any
//! UI toolkit can draw them. The bundled Leptos frontend (wasm32 only) is one
//! such toolkit.

pub mod actions;
pub mod config;
pub mod error;
pub mod routes;
pub mod shell;
pub mod views;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use actions::ViewAction;
pub use config::StorefrontConfig;
pub use error::{StorefrontError, StorefrontResult};
pub use routes::{ROUTES, Route, RouteEntry};
pub use shell::{Page, Shell};
pub use views::{
    CartLine, CartView, Header, LandingView, ListingView, NavLink, NotFoundView, PageBody,
    ProductCard, ViewContext,
};

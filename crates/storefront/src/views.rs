//! Display models for the header and the three pages.
//!
//! Each builder is a pure function of the catalog, the cart and the config.
//! Views never touch the store; the actions they carry are dispatched by the
//! shell.

use serde::Serialize;

use plantshop_cart::{Cart, CartEntry};
use plantshop_catalog::{Catalog, Product};
use plantshop_core::ProductId;

use crate::actions::ViewAction;
use crate::config::StorefrontConfig;
use crate::routes::Route;

/// Everything a view may read.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub cart: &'a Cart,
    pub config: &'a StorefrontConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: &'static str,
}

impl NavLink {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            href: route.path(),
        }
    }
}

/// Persistent header rendered above every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub links: Vec<NavLink>,
    /// Total quantity across the cart, not the number of distinct entries.
    pub cart_count: u64,
}

impl Header {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let cart_count = ctx.cart.total_items();
        Self {
            title: ctx.config.store_name.clone(),
            links: vec![
                NavLink::new("Home", Route::Home),
                NavLink::new("Products", Route::Products),
                NavLink::new(format!("🛒 {cart_count}"), Route::Cart),
            ],
            cart_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    pub heading: String,
    pub blurb: String,
    pub cta: NavLink,
}

impl LandingView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self {
            heading: format!("Welcome to {} 🌿", ctx.config.store_name),
            blurb: ctx.config.tagline.clone(),
            cta: NavLink::new("Get Started", Route::Products),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub category: String,
    pub in_cart: bool,
    pub button_label: &'static str,
    /// `None` once the product is in the cart: the add button is disabled.
    pub add_action: Option<ViewAction>,
}

impl ProductCard {
    fn build(product: &Product, ctx: &ViewContext<'_>) -> Self {
        let in_cart = ctx.cart.contains(product.id);
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: ctx.config.format_price(product.price),
            category: product.category.clone(),
            in_cart,
            button_label: if in_cart { "Added to Cart" } else { "Add to Cart" },
            add_action: (!in_cart).then_some(ViewAction::Add(product.id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub cards: Vec<ProductCard>,
}

impl ListingView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self {
            cards: ctx
                .catalog
                .products()
                .iter()
                .map(|product| ProductCard::build(product, ctx))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    pub decrease: ViewAction,
    pub increase: ViewAction,
    pub remove: ViewAction,
}

impl CartLine {
    fn build(entry: &CartEntry, config: &StorefrontConfig) -> Self {
        let id = entry.product.id;
        Self {
            id,
            name: entry.product.name.clone(),
            image: entry.product.image.clone(),
            price: config.format_price(entry.product.price),
            quantity: entry.quantity,
            line_total: config.format_price(entry.line_total()),
            decrease: ViewAction::Decrease(id),
            increase: ViewAction::Increase(id),
            remove: ViewAction::Remove(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartView {
    Empty {
        message: String,
    },
    Filled {
        total_items: u64,
        total_cost: String,
        lines: Vec<CartLine>,
        checkout_label: String,
        checkout: ViewAction,
    },
}

impl CartView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        let cart = ctx.cart;
        if cart.is_empty() {
            return CartView::Empty {
                message: ctx.config.empty_cart_message.clone(),
            };
        }

        CartView::Filled {
            total_items: cart.total_items(),
            total_cost: ctx.config.format_price(cart.total_cost()),
            lines: cart
                .entries()
                .iter()
                .map(|entry| CartLine::build(entry, ctx.config))
                .collect(),
            checkout_label: ctx.config.checkout_label.clone(),
            checkout: ViewAction::Checkout,
        }
    }
}

/// Shown when the path matches no registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    pub path: String,
    pub message: String,
    pub home: NavLink,
}

impl NotFoundView {
    pub fn build(path: &str) -> Self {
        Self {
            path: path.to_string(),
            message: format!("Nothing lives at {path}."),
            home: NavLink::new("Back to Home", Route::Home),
        }
    }
}

/// The body of whichever page the current route selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "model", rename_all = "snake_case")]
pub enum PageBody {
    Landing(LandingView),
    Listing(ListingView),
    Cart(CartView),
    NotFound(NotFoundView),
}

pub fn landing_page(ctx: &ViewContext<'_>) -> PageBody {
    PageBody::Landing(LandingView::build(ctx))
}

pub fn listing_page(ctx: &ViewContext<'_>) -> PageBody {
    PageBody::Listing(ListingView::build(ctx))
}

pub fn cart_page(ctx: &ViewContext<'_>) -> PageBody {
    PageBody::Cart(CartView::build(ctx))
}

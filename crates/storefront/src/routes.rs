//! Path → view lookup table.

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};
use crate::views::{self, PageBody, ViewContext};

/// Builds the body of a page from the current state.
pub type ViewConstructor = fn(&ViewContext<'_>) -> PageBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Products,
    Cart,
}

impl Route {
    pub fn path(self) -> &'static str {
        self.entry().path
    }

    pub fn entry(self) -> &'static RouteEntry {
        match self {
            Route::Home => &HOME,
            Route::Products => &PRODUCTS,
            Route::Cart => &CART,
        }
    }

    /// Resolve a browser-style path. Query strings, fragments and a trailing
    /// slash are ignored; anything else unknown is an error.
    pub fn from_path(path: &str) -> StorefrontResult<Route> {
        RouteEntry::lookup(path).map(|entry| entry.route)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub path: &'static str,
    pub route: Route,
    pub build: ViewConstructor,
}

const HOME: RouteEntry = RouteEntry {
    path: "/",
    route: Route::Home,
    build: views::landing_page,
};

const PRODUCTS: RouteEntry = RouteEntry {
    path: "/products",
    route: Route::Products,
    build: views::listing_page,
};

const CART: RouteEntry = RouteEntry {
    path: "/cart",
    route: Route::Cart,
    build: views::cart_page,
};

/// Every navigable page, in header order.
pub const ROUTES: &[RouteEntry] = &[HOME, PRODUCTS, CART];

impl RouteEntry {
    pub fn lookup(path: &str) -> StorefrontResult<&'static RouteEntry> {
        let normalized = normalize(path);
        ROUTES
            .iter()
            .find(|entry| entry.path == normalized)
            .ok_or_else(|| StorefrontError::UnknownRoute(path.to_string()))
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

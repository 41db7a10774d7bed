//! The shell: owns the cart store, tracks the current route and renders the
//! header plus the routed page.

use serde::Serialize;
use tracing::{debug, info, warn};

use plantshop_cart::{CartEnvelope, CartStore};
use plantshop_catalog::Catalog;
use plantshop_events::Subscription;

use crate::actions::ViewAction;
use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;
use crate::routes::{Route, RouteEntry};
use crate::views::{Header, NotFoundView, PageBody, ViewContext};

/// One rendered screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub path: String,
    pub header: Header,
    pub body: PageBody,
}

/// Where the shell currently points.
#[derive(Debug, Clone)]
enum Location {
    Routed(&'static RouteEntry),
    /// A path with no registered view; rendered as a not-found page.
    Unmatched(String),
}

#[derive(Debug)]
pub struct Shell {
    config: StorefrontConfig,
    catalog: Catalog,
    store: CartStore,
    location: Location,
}

impl Shell {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            store: CartStore::new(),
            location: Location::Routed(Route::Home.entry()),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only access to the store; mutate through [`Shell::dispatch`].
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// `None` while showing the not-found page.
    pub fn route(&self) -> Option<Route> {
        match &self.location {
            Location::Routed(entry) => Some(entry.route),
            Location::Unmatched(_) => None,
        }
    }

    pub fn path(&self) -> &str {
        match &self.location {
            Location::Routed(entry) => entry.path,
            Location::Unmatched(path) => path,
        }
    }

    pub fn subscribe(&self) -> Subscription<CartEnvelope> {
        self.store.subscribe()
    }

    /// Switch to the view registered for `path`.
    ///
    /// An unknown path still moves the shell: it renders the not-found page
    /// until the next successful navigation, and the lookup error is returned.
    pub fn navigate(&mut self, path: &str) -> StorefrontResult<Route> {
        match RouteEntry::lookup(path) {
            Ok(entry) => {
                if self.route() != Some(entry.route) {
                    info!(from = self.path(), to = entry.path, "navigated");
                }
                self.location = Location::Routed(entry);
                Ok(entry.route)
            }
            Err(err) => {
                warn!(from = self.path(), to = path, "no view registered for path");
                self.location = Location::Unmatched(path.to_string());
                Err(err)
            }
        }
    }

    /// Apply a view action to the store. Returns whether the cart changed.
    pub fn dispatch(&mut self, action: &ViewAction) -> StorefrontResult<bool> {
        debug!(?action, path = self.path(), "dispatching view action");
        action.dispatch(&self.catalog, &mut self.store)
    }

    pub fn header(&self) -> Header {
        Header::build(&self.context())
    }

    pub fn render(&self) -> Page {
        let ctx = self.context();
        let body = match &self.location {
            Location::Routed(entry) => (entry.build)(&ctx),
            Location::Unmatched(path) => PageBody::NotFound(NotFoundView::build(path)),
        };
        Page {
            path: self.path().to_string(),
            header: Header::build(&ctx),
            body,
        }
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext {
            catalog: &self.catalog,
            cart: self.store.cart(),
            config: &self.config,
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(StorefrontConfig::default(), Catalog::plants())
    }
}

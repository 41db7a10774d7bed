//! Storefront presentation settings.
//!
//! Everything has a default, so an embedder only supplies what it wants to
//! change:
//!
//! ```ignore
//! let config = StorefrontConfig::from_json(r#"{ "currency_symbol": "$" }"#)?;
//! assert_eq!(config.store_name, "Jay's Plants");
//! ```

use serde::{Deserialize, Serialize};

use plantshop_core::Price;

use crate::error::StorefrontResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Shown in the header and the landing heading.
    pub store_name: String,
    /// Landing page copy under the heading.
    pub tagline: String,
    /// Prefix for every displayed price.
    pub currency_symbol: String,
    /// Label of the (stubbed) checkout button.
    pub checkout_label: String,
    pub empty_cart_message: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: "Jay's Plants".to_string(),
            tagline: "Discover beautiful, affordable plants to brighten your home and workspace."
                .to_string(),
            currency_symbol: "₱".to_string(),
            checkout_label: "Checkout – Coming Soon".to_string(),
            empty_cart_message: "Your cart is empty.".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> StorefrontResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn format_price(&self, price: Price) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

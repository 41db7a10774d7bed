use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use plantshop_core::{DomainError, DomainResult, Entity, Price, ProductId};

/// Placeholder artwork used by every plant in the default catalog.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";

/// A purchasable product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit.
    pub price: Price,
    pub category: String,
    pub image: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: Price::new(price),
            category: category.into(),
            image: image.into(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Read-only list of products, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {} in catalog",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The storefront's fixed plant catalog.
    pub fn plants() -> Self {
        let products = [
            (1, "Snake Plant", 350, "Indoor"),
            (2, "Peace Lily", 420, "Indoor"),
            (3, "Aloe Vera", 280, "Succulent"),
            (4, "Cactus", 200, "Succulent"),
            (5, "Spider Plant", 300, "Hanging"),
            (6, "Boston Fern", 390, "Hanging"),
        ]
        .into_iter()
        .map(|(id, name, price, category)| Product::new(id, name, price, category, PLACEHOLDER_IMAGE))
        .collect();

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is a [`DomainError::NotFound`].
    pub fn require(&self, id: ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or_else(DomainError::not_found)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::plants()
    }
}

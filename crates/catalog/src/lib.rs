//! Catalog domain module.
//!
//! The catalog is static, hard-coded data: defined once at start-up and never
//! mutated afterwards.

pub mod product;

pub use product::{Catalog, Product};

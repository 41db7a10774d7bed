//! `plantshop-core` — domain building blocks shared by the storefront crates.
//!
//! Pure domain primitives only: no IO, no UI, no logging setup.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::{Price, ValueObject};

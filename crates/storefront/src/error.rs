//! Storefront error type.

use plantshop_core::DomainError;
use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Failures at the storefront edge. Cart transitions themselves never fail.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("no view is registered for path {0:?}")]
    UnknownRoute(String),

    #[error("invalid storefront configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

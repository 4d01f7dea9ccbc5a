//! Error type for order creation.

use crate::model::ProductId;
use crate::repositories::RepositoryError;
use thiserror::Error;

/// Why an order could not be created.
///
/// Every variant is terminal: the first failed check ends the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    /// A referenced record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request itself is malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A product has fewer units in stock than requested.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CreateOrderError {
    /// HTTP status an outer layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_) => 400,
            Self::InsufficientStock { .. } => 409,
            Self::Repository(RepositoryError::Conflict(_)) => 409,
            Self::Repository(RepositoryError::Backend(_)) => 503,
        }
    }
}

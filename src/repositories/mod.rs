//! # Repository Capabilities
//!
//! The three capabilities [`CreateOrderService`](crate::services::CreateOrderService)
//! depends on. The service is generic over them, so it can run against the resource
//! actors (see [`clients`](crate::clients)), a database adapter or a test double.

use crate::model::{
    Customer, CustomerId, Order, OrderCreate, Product, ProductQuantityUpdate, RequestedProduct,
};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a repository implementation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// A conditional write found the record in a different state than expected.
    #[error("Conflicting update: {0}")]
    Conflict(String),

    /// The backing store rejected or could not serve the request.
    #[error("Repository unavailable: {0}")]
    Backend(String),
}

/// Customer lookup.
#[async_trait]
pub trait CustomersRepository: Send + Sync {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError>;
}

/// Product lookup and stock writes.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Returns the stocked products whose id appears in `products`.
    ///
    /// Missing ids are left out, each product appears at most once, and the order of
    /// the result is unspecified.
    async fn find_all_by_id(
        &self,
        products: &[RequestedProduct],
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Applies every update or none of them.
    ///
    /// # Errors
    /// [`RepositoryError::Conflict`] when a product's stock no longer equals the
    /// update's `expected` value.
    async fn update_quantity(&self, updates: Vec<ProductQuantityUpdate>)
        -> Result<(), RepositoryError>;
}

/// Order persistence.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists a new order, assigning its id and timestamps.
    async fn create(&self, order: OrderCreate) -> Result<Order, RepositoryError>;
}

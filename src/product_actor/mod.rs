//! # Product Actor
//!
//! The product catalog and its stock levels, with custom actions beyond create/read.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Current stock level (read-only)
//! let stock = product_client.check_stock(product_id).await?;
//!
//! // Compare-and-set a batch of stock levels, all or nothing
//! product_client.set_stock(updates).await?;
//! ```
//!
//! `SetStock` only writes when the stock still holds the value the caller read, so two
//! orders racing for the same product cannot both decrement from the same snapshot.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

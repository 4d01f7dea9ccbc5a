//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper maps framework failures into its resource's error type and implements
//! the matching [`repositories`](crate::repositories) trait, which is how the actors
//! back [`CreateOrderService`](crate::services::CreateOrderService).

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;

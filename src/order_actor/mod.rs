//! Order records: creation stamps identity and timestamps, reads return the stored order.
//!
//! Validation against customers and stock happens before an order reaches this actor,
//! in [`CreateOrderService`](crate::services::CreateOrderService).

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}

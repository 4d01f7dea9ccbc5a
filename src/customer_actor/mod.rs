//! # Customer Actor
//!
//! Customer records, managed by a [`ResourceActor`]. The simplest resource in the
//! system: no dependencies (`Context = ()`) and no custom actions. The order flow
//! only ever reads customers.
//!
//! ## Usage
//!
//! ```rust
//! use order_service::customer_actor;
//! use order_service::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = customer_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let customer = client
//!         .create_customer(CustomerCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(customer.id.to_string(), "customer_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}

//! # System Lifecycle & Orchestration
//!
//! Starts the resource actors, wires the order service on top of their clients, and
//! shuts everything down again.
//!
//! ## The OrderSystem Pattern
//!
//! ```rust,ignore
//! impl OrderSystem {
//!     pub fn new(config: &ServiceConfig) -> Self {
//!         // 1. Create actors and their clients
//!         let (customer_actor, customer_client) = customer_actor::new(config.channel_buffer);
//!         let (product_actor, product_client) = product_actor::new(config.channel_buffer);
//!         let (order_actor, order_client) = order_actor::new(config.channel_buffer);
//!
//!         // 2. Start them; none of them depends on another (Context = ())
//!         let handles = vec![
//!             tokio::spawn(customer_actor.run(())),
//!             tokio::spawn(product_actor.run(())),
//!             tokio::spawn(order_actor.run(())),
//!         ];
//!
//!         // 3. The service talks to the actors through client clones
//!         let orders = CreateOrderService::new(
//!             customer_client.clone(),
//!             product_client.clone(),
//!             order_client.clone(),
//!             config.line_pricing,
//!         );
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - including the clones held by the service
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - every actor task must finish without panicking
//!
//! Clones handed out to callers keep their actor alive, so
//! [`OrderSystem::shutdown`] only returns once those are dropped as well.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary. See the
//! [`tracing`](self::tracing) module for the log levels in use.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::setup_tracing;

//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores in Rust. Each resource type
//! (Customer, Product, Order, …) is owned by one actor running in its own Tokio task, and
//! the rest of the application talks to it through a cloneable client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - your domain record and its custom actions
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the in-memory store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Requests
//!
//! Every actor understands the same small request set (see [`ResourceRequest`]):
//! `Create`, `Get`, `GetMany`, `Action` and `ActionBatch`. The batch is applied
//! atomically: the actor stages every action on a copy of the affected entities and
//! commits only when all of them succeed. Because an actor handles one message at a
//! time, a batch of compare-and-set actions is a safe way to express "write only if
//! nothing changed since I read it".
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction
//! time, so actors can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (customer_actor, customer_client) = ResourceActor::<Customer>::new(32);
//! tokio::spawn(customer_actor.run(()));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from a queue of expectations,
//! so code built on clients can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

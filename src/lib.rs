//! # Order Service
//!
//! Order creation for a small e-commerce backend: a customer orders a list of products,
//! the order is checked against the customer and product records, the ordered
//! quantities are taken out of stock, and the order is stored.
//!
//! ## Module Tour
//!
//! ### 1. The Use-case ([`services`])
//! [`CreateOrderService`](services::CreateOrderService) holds the business rules. It
//! only sees the three capabilities in [`repositories`], so it runs unchanged against
//! any store that implements them.
//!
//! ### 2. The Stores ([`customer_actor`], [`product_actor`], [`order_actor`])
//! In-process implementations of those capabilities, built on the generic
//! [`ResourceActor`](actor_framework::ResourceActor). Each record type lives in one
//! actor; the product actor applies stock writes as one compare-and-set batch.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers around `ResourceClient`, which also implement the repository traits.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns the actors, wires the service and
//! shuts everything down. Settings come from [`config`].
//!
//! ## Error Handling
//!
//! Each layer has its own `thiserror` enum: `FrameworkError` for the channel plumbing,
//! `CustomerError`/`ProductError`/`OrderError` per actor,
//! [`RepositoryError`](repositories::RepositoryError) at the capability boundary and
//! [`CreateOrderError`](services::CreateOrderError) for callers of the use-case.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_SERVICE_LINE_PRICING=extended RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod repositories;
pub mod services;

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber filtered by
//! `RUST_LOG`. The compact format hides the module path (`with_target(false)`);
//! actors tag their lines with `entity_type` instead.
//!
//! ## Levels
//!
//! - `error`: an order could not be stored after its stock was already decremented
//! - `warn`: rejected requests (validation, insufficient stock, stock conflicts)
//! - `info`: state changes (created records, committed stock batches, lifecycle)
//! - `debug`: payloads and planned stock updates
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=order_service::services=debug,actor_framework=warn cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Created entity_type="Customer" id=customer_1 size=1
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO Batch committed entity_type="Product" size=1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO order_processing:execute: Order created order_id=order_1
//! ```
//!
//! Spans opened by the caller (`order_processing` in the demo binary) prefix the lines
//! logged by the service. Actors run on their own tasks and log outside those spans.

/// Installs the global subscriber.
///
/// Keeps the existing global subscriber if one is already installed.
pub fn setup_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
    if let Err(e) = installed {
        ::tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_tracing_twice_does_not_panic() {
        setup_tracing();
        setup_tracing();
    }
}

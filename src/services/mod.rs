//! # Use-cases
//!
//! Business operations composed from the [`repositories`](crate::repositories)
//! capabilities. They hold no state of their own between calls.

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;

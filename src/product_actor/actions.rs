//! Custom actions for the Product actor.
//!
//! Domain-specific operations on a [`Product`](crate::model::Product), handled by its
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Sets the stock level to `quantity`, provided it currently equals `expected`.
    ///
    /// # Errors
    /// Fails with [`ProductError::StockChanged`](super::ProductError::StockChanged)
    /// when the stock moved since the caller read it.
    SetStock { expected: u32, quantity: u32 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - the current stock level
    CheckStock(u32),
    /// Result from SetStock action - the new stock level
    SetStock(u32),
}

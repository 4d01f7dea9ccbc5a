//! [`ActorEntity`] implementation for [`Product`], including the stock actions.

use super::actions::{ProductAction, ProductActionResult};
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// `ValidationError` for a blank name or a negative price.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(ProductError::ValidationError("name is required".into()));
        }
        if params.price < Decimal::ZERO {
            return Err(ProductError::ValidationError(format!(
                "price must not be negative: {}",
                params.price
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            name: name.to_string(),
            price: params.price,
            quantity: params.quantity,
            created_at: now,
            updated_at: now,
        })
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the stock on hand
    /// - `SetStock`: Compare-and-set of the stock on hand
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::SetStock { expected, quantity } => {
                if self.quantity != expected {
                    return Err(ProductError::StockChanged {
                        id: self.id.clone(),
                        expected,
                        actual: self.quantity,
                    });
                }
                self.quantity = quantity;
                self.updated_at = Utc::now();
                Ok(ProductActionResult::SetStock(quantity))
            }
        }
    }
}

//! [`ActorEntity`] implementation for [`Order`].

use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = (); // Orders are immutable once placed
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order. An order must have at least one line item.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.products.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one product".into(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            customer: params.customer,
            products: params.products,
            created_at: now,
            updated_at: now,
        })
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

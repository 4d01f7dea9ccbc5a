//! # Order Client
//!
//! Persists orders through the `Order` actor.
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::repositories::{OrdersRepository, RepositoryError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Stores orders that were already validated; the checks against customers and stock
/// live in [`CreateOrderService`](crate::services::CreateOrderService).
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(customer_id = %order.customer.id, lines = order.products.len()))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(order).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.entity_error::<OrderError>()
            .cloned()
            .unwrap_or_else(|| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl OrdersRepository for OrderClient {
    async fn create(&self, order: OrderCreate) -> Result<Order, RepositoryError> {
        self.create_order(order)
            .await
            .map_err(|e| RepositoryError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, CustomerId, OrderId, OrderProduct, ProductId};
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order_create() -> OrderCreate {
        let now = Utc::now();
        OrderCreate {
            customer: Customer {
                id: CustomerId(1),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                created_at: now,
                updated_at: now,
            },
            products: vec![OrderProduct {
                product_id: ProductId(1),
                price: Decimal::new(10, 0),
                quantity: 3,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_stored_order() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move { order_client.create_order(order_create()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.products.len(), 1);
        let now = Utc::now();
        responder
            .send(Ok(Order {
                id: OrderId(1),
                customer: params.customer,
                products: params.products,
                created_at: now,
                updated_at: now,
            }))
            .unwrap();

        let order = create_task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.products[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_repository_create_maps_failures_to_backend() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            OrderError::ValidationError("order has no products".into()),
        )));
        let client = OrderClient::new(mock.client());

        let err = OrdersRepository::create(&client, order_create())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Backend("Order validation error: order has no products".into())
        );
        mock.verify();
    }
}

//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductCreate, ProductId, ProductQuantityUpdate, RequestedProduct};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::repositories::{ProductsRepository, RepositoryError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result for CheckStock: {other:?}"
            ))),
        }
    }

    /// Writes every stock level in `updates`, or none of them.
    ///
    /// # Errors
    /// [`ProductError::StockChanged`] for the first product whose stock is no longer
    /// the update's `expected` value. Nothing is written in that case.
    #[instrument(skip(self, updates), fields(size = updates.len()))]
    pub async fn set_stock(&self, updates: Vec<ProductQuantityUpdate>) -> Result<(), ProductError> {
        let actions = updates
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ProductAction::SetStock {
                        expected: u.expected,
                        quantity: u.quantity,
                    },
                )
            })
            .collect();
        debug!("Sending batch");
        self.inner
            .perform_batch(actions)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            e => e
                .entity_error::<ProductError>()
                .cloned()
                .unwrap_or_else(|| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ProductsRepository for ProductClient {
    async fn find_all_by_id(
        &self,
        products: &[RequestedProduct],
    ) -> Result<Vec<Product>, RepositoryError> {
        let ids = products.iter().map(|p| p.id.clone()).collect();
        self.get_many(ids)
            .await
            .map_err(|e| RepositoryError::Backend(e.to_string()))
    }

    async fn update_quantity(
        &self,
        updates: Vec<ProductQuantityUpdate>,
    ) -> Result<(), RepositoryError> {
        self.set_stock(updates).await.map_err(|e| match e {
            ProductError::StockChanged { .. } | ProductError::NotFound(_) => {
                RepositoryError::Conflict(e.to_string())
            }
            other => RepositoryError::Backend(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_batch, expect_get_many, MockClient};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        let result = check_task.await.unwrap();
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_check_stock_unknown_product() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(9))
            .return_err(FrameworkError::NotFound("product_9".into()));
        let client = ProductClient::new(mock.client());

        let err = client.check_stock(ProductId(9)).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound("product_9".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_set_stock_sends_one_batch() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let set_task = tokio::spawn(async move {
            product_client
                .set_stock(vec![
                    ProductQuantityUpdate {
                        id: ProductId(1),
                        quantity: 2,
                        expected: 5,
                    },
                    ProductQuantityUpdate {
                        id: ProductId(2),
                        quantity: 0,
                        expected: 1,
                    },
                ])
                .await
        });

        let (actions, responder) = expect_batch(&mut receiver)
            .await
            .expect("Expected ActionBatch request");
        assert_eq!(
            actions,
            vec![
                (
                    ProductId(1),
                    ProductAction::SetStock {
                        expected: 5,
                        quantity: 2
                    }
                ),
                (
                    ProductId(2),
                    ProductAction::SetStock {
                        expected: 1,
                        quantity: 0
                    }
                ),
            ]
        );
        responder
            .send(Ok(vec![
                ProductActionResult::SetStock(2),
                ProductActionResult::SetStock(0),
            ]))
            .unwrap();

        assert!(set_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_update_quantity_reports_stock_change_as_conflict() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_batch()
            .return_err(FrameworkError::EntityError(Box::new(
                ProductError::StockChanged {
                    id: ProductId(1),
                    expected: 5,
                    actual: 4,
                },
            )));
        let client = ProductClient::new(mock.client());

        let err = client
            .update_quantity(vec![ProductQuantityUpdate {
                id: ProductId(1),
                quantity: 2,
                expected: 5,
            }])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Conflict("Stock of product_1 changed: expected 5, found 4".into())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_quantity_reports_closed_actor_as_backend_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_batch().return_err(FrameworkError::ActorClosed);
        let client = ProductClient::new(mock.client());

        let err = client.update_quantity(vec![]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Backend(_)));
    }

    #[tokio::test]
    async fn test_find_all_by_id_requests_every_id() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let find_task = tokio::spawn(async move {
            product_client
                .find_all_by_id(&[
                    RequestedProduct::new(ProductId(3), 1),
                    RequestedProduct::new(ProductId(1), 2),
                ])
                .await
        });

        let (ids, responder) = expect_get_many(&mut receiver)
            .await
            .expect("Expected GetMany request");
        assert_eq!(ids, vec![ProductId(3), ProductId(1)]);
        responder.send(Ok(vec![])).unwrap();

        assert!(find_task.await.unwrap().unwrap().is_empty());
    }
}

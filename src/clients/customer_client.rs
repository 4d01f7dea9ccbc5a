//! # Customer Client
//!
//! Provides a high‑level API for interacting with the `Customer` actor.
//! It wraps a `ResourceClient<Customer>` and exposes domain‑specific methods.
use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId};
use crate::repositories::{CustomersRepository, RepositoryError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }

    /// Registers a customer and returns the stored record.
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.entity_error::<CustomerError>()
            .cloned()
            .unwrap_or_else(|| CustomerError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl CustomersRepository for CustomerClient {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        self.get(id.clone())
            .await
            .map_err(|e| RepositoryError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};
    use chrono::Utc;

    fn customer(id: u32) -> Customer {
        let now = Utc::now();
        Customer {
            id: CustomerId(id),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_customer_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customer_client = CustomerClient::new(client);

        let create_task = tokio::spawn(async move {
            customer_client
                .create_customer(CustomerCreate {
                    name: "Alice".to_string(),
                    email: "alice@example.com".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Alice");
        responder.send(Ok(customer(1))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, CustomerId(1));
    }

    #[tokio::test]
    async fn test_create_customer_keeps_validation_error() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                CustomerError::ValidationError("name is required".into()),
            )));
        let client = CustomerClient::new(mock.client());

        let err = client
            .create_customer(CustomerCreate {
                name: " ".to_string(),
                email: "a@b.c".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CustomerError::ValidationError("name is required".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(1)).return_ok(Some(customer(1)));
        mock.expect_get(CustomerId(2)).return_ok(None);
        let client = CustomerClient::new(mock.client());

        let found = client.find_by_id(&CustomerId(1)).await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(CustomerId(1)));
        assert_eq!(client.find_by_id(&CustomerId(2)).await.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_by_id_reports_closed_actor_as_backend_error() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(CustomerId(1))
            .return_err(FrameworkError::ActorClosed);
        let client = CustomerClient::new(mock.client());

        let err = client.find_by_id(&CustomerId(1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Backend(_)));
    }
}

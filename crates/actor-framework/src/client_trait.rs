//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get` and `get_many`
//! built on top of a generic `ResourceClient`, with errors mapped into the
//! resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard lookups.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Customer { id: u32 }
/// #[derive(Debug)] struct CustomerCreate;
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CustomerError(String);
///
/// #[async_trait]
/// impl ActorEntity for Customer {
///     type Id = u32;
///     type Create = CustomerCreate;
///     type Action = ();
///     type ActionResult = ();
///     type Context = ();
///     type Error = CustomerError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: CustomerCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CustomerClient {
///     inner: ResourceClient<Customer>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Customer> for CustomerClient {
///     type Error = CustomerError;
///
///     fn inner(&self) -> &ResourceClient<Customer> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CustomerError(e.to_string())
///     }
/// }
///
/// async fn usage(client: CustomerClient) {
///     // get() and get_many() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.get_many(vec![1, 2]).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in `ids` that exists.
    #[tracing::instrument(skip(self))]
    async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_many(ids).await.map_err(Self::map_error)
    }
}

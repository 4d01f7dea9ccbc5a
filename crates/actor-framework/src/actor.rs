//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its own messages
/// *sequentially*, so the `store` needs no `Mutex` or `RwLock`, and a multi-step
/// request such as an action batch observes no interleaved writes.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] enum CounterAction { Increment }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u32, Self::Error> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let counter = client.create(CounterCreate).await.unwrap();
///     let value = client.perform_action(counter.id, CounterAction::Increment).await.unwrap();
///     assert_eq!(value, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next ID from the `u32` counter (fails with
///   [`FrameworkError::IdsExhausted`] after `u32::MAX`), `from_create_params`, `on_create`,
///   insert, respond with a clone of the stored entity.
/// * **Get**: clone of the entity, or `None`.
/// * **GetMany**: clones of the entities that exist, in request order, each at most once.
/// * **Action**: `handle_action` on the stored entity.
/// * **ActionBatch**: every action runs against a staged clone; the clones replace
///   the stored entities only if all actions succeed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// `None` once every `u32` ID has been handed out.
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Product" instead of "order_service::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Create rejected: IDs exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    self.next_id = raw_id.checked_add(1);
                    let id = T::Id::from(raw_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = self.get_many(&ids);
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::ActionBatch {
                    actions,
                    respond_to,
                } => {
                    let size = actions.len();
                    debug!(entity_type, size, ?actions, "ActionBatch");
                    let result = self.apply_batch(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, size, "Batch committed"),
                        Err(e) => warn!(entity_type, size, error = %e, "Batch rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::new();
        ids.iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            let item = match staged.entry(id.clone()) {
                std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
                std::collections::hash_map::Entry::Vacant(entry) => match self.store.get(&id) {
                    Some(stored) => entry.insert(stored.clone()),
                    None => return Err(FrameworkError::NotFound(id.to_string())),
                },
            };
            let result = item
                .handle_action(action, context)
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
            results.push(result);
        }

        self.store.extend(staged);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Take(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("cannot take {0}")]
    struct CounterError(u32);

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Action = CounterAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CounterError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                value: params.value,
            })
        }

        async fn handle_action(
            &mut self,
            action: CounterAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                CounterAction::Take(n) if n <= self.value => {
                    self.value -= n;
                    Ok(self.value)
                }
                CounterAction::Take(n) => Err(CounterError(n)),
            }
        }
    }

    async fn spawn_with(values: &[u32]) -> ResourceClient<Counter> {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        tokio::spawn(actor.run(()));
        for value in values {
            client
                .create(CounterCreate { value: *value })
                .await
                .unwrap();
        }
        client
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_run_out() {
        let (mut actor, client) = ResourceActor::<Counter>::new(10);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(()));

        let last = client.create(CounterCreate { value: 1 }).await.unwrap();
        assert_eq!(last.id, u32::MAX);

        let result = client.create(CounterCreate { value: 2 }).await;
        assert!(matches!(result, Err(FrameworkError::IdsExhausted)));

        // The last record is not overwritten
        assert_eq!(client.get(u32::MAX).await.unwrap().unwrap().value, 1);
    }

    #[tokio::test]
    async fn test_get_many_skips_missing_and_duplicates() {
        let client = spawn_with(&[5, 7]).await;

        let found = client.get_many(vec![2, 9, 1, 2]).await.unwrap();
        let ids: Vec<u32> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_batch_commits_all_actions() {
        let client = spawn_with(&[5, 7]).await;

        let results = client
            .perform_batch(vec![
                (1, CounterAction::Take(2)),
                (2, CounterAction::Take(7)),
                (1, CounterAction::Take(1)),
            ])
            .await
            .unwrap();
        assert_eq!(results, vec![3, 0, 2]);

        assert_eq!(client.get(1).await.unwrap().unwrap().value, 2);
        assert_eq!(client.get(2).await.unwrap().unwrap().value, 0);
    }

    #[tokio::test]
    async fn test_batch_is_discarded_when_one_action_fails() {
        let client = spawn_with(&[5, 7]).await;

        let result = client
            .perform_batch(vec![(1, CounterAction::Take(5)), (2, CounterAction::Take(8))])
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.entity_error::<CounterError>().map(|e| e.0), Some(8));

        assert_eq!(client.get(1).await.unwrap().unwrap().value, 5);
        assert_eq!(client.get(2).await.unwrap().unwrap().value, 7);
    }

    #[tokio::test]
    async fn test_batch_with_unknown_id_is_discarded() {
        let client = spawn_with(&[5]).await;

        let result = client
            .perform_batch(vec![(1, CounterAction::Take(1)), (42, CounterAction::Take(1))])
            .await;
        assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
        assert_eq!(client.get(1).await.unwrap().unwrap().value, 5);
    }
}

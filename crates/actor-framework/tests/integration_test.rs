use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Seat {
    id: u32,
    row: String,
    held_by: Option<String>,
}

#[derive(Debug)]
struct SeatCreate {
    row: String,
}

#[derive(Debug)]
enum SeatAction {
    Hold(String),
    Release,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum SeatError {
    #[error("Seat already held by {0}")]
    AlreadyHeld(String),
    #[error("Row must not be empty")]
    EmptyRow,
}

#[async_trait]
impl ActorEntity for Seat {
    type Id = u32;
    type Create = SeatCreate;
    type Action = SeatAction;
    type ActionResult = bool;
    type Context = ();
    type Error = SeatError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: SeatCreate) -> Result<Self, Self::Error> {
        if params.row.is_empty() {
            return Err(SeatError::EmptyRow);
        }
        Ok(Self {
            id,
            row: params.row,
            held_by: None,
        })
    }

    async fn handle_action(
        &mut self,
        action: SeatAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            SeatAction::Hold(who) => match &self.held_by {
                Some(holder) => Err(SeatError::AlreadyHeld(holder.clone())),
                None => {
                    self.held_by = Some(who);
                    Ok(true)
                }
            },
            SeatAction::Release => Ok(self.held_by.take().is_some()),
        }
    }
}

struct SeatClient {
    inner: ResourceClient<Seat>,
}

#[async_trait]
impl ActorClient<Seat> for SeatClient {
    type Error = String;

    fn inner(&self) -> &ResourceClient<Seat> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.to_string()
    }
}

fn seat(row: &str) -> SeatCreate {
    SeatCreate { row: row.into() }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let created: Seat = client.create(seat("A")).await.unwrap();
    assert_eq!(created.id, 1); // First ID should be 1
    assert_eq!(created.held_by, None);

    // 2. Perform Action
    let held = client
        .perform_action(created.id, SeatAction::Hold("alice".into()))
        .await
        .unwrap();
    assert!(held);

    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.held_by.as_deref(), Some("alice"));

    // 3. Failing action surfaces the entity error
    let err = client
        .perform_action(created.id, SeatAction::Hold("bob".into()))
        .await
        .unwrap_err();
    assert_eq!(
        err.entity_error::<SeatError>(),
        Some(&SeatError::AlreadyHeld("alice".into()))
    );

    // 4. Action on a missing entity
    let missing = client.perform_action(99, SeatAction::Release).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));

    // 5. Shutdown once every client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_create_failure_does_not_consume_store_slot() {
    let (actor, client) = ResourceActor::<Seat>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(seat("")).await.unwrap_err();
    assert_eq!(err.entity_error::<SeatError>(), Some(&SeatError::EmptyRow));

    let all = client.get_many(vec![1, 2, 3]).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_batch_rolls_back_through_actor_client() {
    let (actor, inner) = ResourceActor::<Seat>::new(10);
    tokio::spawn(actor.run(()));
    let client = SeatClient { inner };

    let a = client.inner().create(seat("A")).await.unwrap();
    let b = client.inner().create(seat("B")).await.unwrap();
    client
        .inner()
        .perform_action(b.id, SeatAction::Hold("carol".into()))
        .await
        .unwrap();

    // Holding both seats fails on B, so A must stay free
    let result = client
        .inner()
        .perform_batch(vec![
            (a.id, SeatAction::Hold("dave".into())),
            (b.id, SeatAction::Hold("dave".into())),
        ])
        .await;
    assert!(result.is_err());

    let seats = client.get_many(vec![a.id, b.id]).await.unwrap();
    assert_eq!(seats[0].held_by, None);
    assert_eq!(seats[1].held_by.as_deref(), Some("carol"));
}

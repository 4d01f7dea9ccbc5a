//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc
/// messages per operation, requests are standardized around a small set that applies
/// to any stored record:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource and returns it.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **GetMany**: Bulk lookup. Returns the distinct resources whose ID exists, skipping the rest.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on one resource.
/// - **ActionBatch**: Executes several actions as one unit. Either every action
///   succeeds and all changes are kept, or none are.
///
/// The enum is generic over `T: ActorEntity`, so a "Customer Create" payload can't be
/// sent to a "Product" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    ActionBatch {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
}

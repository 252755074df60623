//! # Generic Messages
//!
//! Message types exchanged between a [`SliceClient`](crate::SliceClient) and its
//! [`SliceActor`](crate::SliceActor).

use crate::error::FrameworkError;
use crate::slice::Slice;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a slice actor.
///
/// - **Dispatch**: apply one action. The actor answers once the action is applied and
///   the new snapshot is published, which lets a caller sequence its own dispatches.
/// - **Snapshot**: read the state after every previously queued request was handled.
#[derive(Debug)]
pub enum SliceRequest<S: Slice> {
    Dispatch {
        action: S::Action,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

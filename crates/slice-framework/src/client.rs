//! # Slice Client
//!
//! This module defines the handle code uses to talk to a [`SliceActor`](crate::SliceActor).

use crate::error::FrameworkError;
use crate::message::SliceRequest;
use crate::slice::Slice;
use crate::thunk::Thunk;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

/// A type-safe handle for reading and updating a slice.
///
/// * **Cloneable** – holds a sender and a watch receiver, so cloning is inexpensive.
/// * **Ordered writes** – [`dispatch`](Self::dispatch) resolves only after the action is
///   applied and published, so consecutive dispatches from one caller land in order.
/// * **Lock-free reads** – [`state`](Self::state) returns the latest published snapshot.
pub struct SliceClient<S: Slice> {
    sender: mpsc::Sender<SliceRequest<S>>,
    subscriber: watch::Receiver<S>,
}

impl<S: Slice> Clone for SliceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            subscriber: self.subscriber.clone(),
        }
    }
}

impl<S: Slice> SliceClient<S> {
    pub fn new(sender: mpsc::Sender<SliceRequest<S>>, subscriber: watch::Receiver<S>) -> Self {
        Self { sender, subscriber }
    }

    /// Applies one action and waits until the actor has published the result.
    pub async fn dispatch(&self, action: S::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Reads the state after every request queued before this one has been handled.
    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SliceRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns the most recently published state.
    pub fn state(&self) -> S {
        self.subscriber.borrow().clone()
    }

    /// Reads the most recently published state without cloning all of it.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&self.subscriber.borrow())
    }

    /// Subscribes to every state the actor publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.subscriber.clone()
    }

    /// Runs a thunk against this store and waits for it to finish.
    ///
    /// The thunk runs on its own task. Dropping the returned future stops the wait, not
    /// the thunk. A panic inside the thunk is resumed in the caller.
    pub async fn dispatch_thunk<T: Thunk<S>>(&self, thunk: T) {
        let handle = tokio::spawn(thunk.run(self.clone()));
        if let Err(e) = handle.await {
            if e.is_panic() {
                std::panic::resume_unwind(e.into_panic());
            }
        }
    }

    /// Runs a thunk on its own task and returns immediately.
    pub fn spawn_thunk<T: Thunk<S>>(&self, thunk: T) -> JoinHandle<()> {
        tokio::spawn(thunk.run(self.clone()))
    }
}

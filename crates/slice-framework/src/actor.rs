//! # Slice Actor
//!
//! This module defines the `SliceActor`, the task that owns a slice's state. It is the
//! "server" half of the store: it drains its request channel, applies each action with
//! the slice's reducer, and publishes the result.

use crate::client::SliceClient;
use crate::message::SliceRequest;
use crate::slice::Slice;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

/// The actor that owns one slice of state.
///
/// # Concurrency Model
/// The actor processes requests *sequentially*. Any number of clients and thunks may
/// dispatch concurrently, but their actions are applied one at a time in channel order,
/// so the last action applied wins. No lock guards the state; the task owns it.
///
/// # Usage Pattern
///
/// 1. **Create**: `SliceActor::new(initial, buffer)` returns the actor and a client.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client into whatever needs to read or dispatch.
///
/// The actor stops when every client has been dropped.
pub struct SliceActor<S: Slice> {
    receiver: mpsc::Receiver<SliceRequest<S>>,
    publisher: watch::Sender<S>,
    state: S,
}

impl<S: Slice> SliceActor<S> {
    /// Creates a new `SliceActor` holding `initial` and its associated `SliceClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state before any action is applied.
    /// * `buffer_size` - The capacity of the request channel. When it is full, dispatching
    ///   waits for space.
    pub fn new(initial: S, buffer_size: usize) -> (Self, SliceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, subscriber) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            publisher,
            state: initial,
        };
        let client = SliceClient::new(sender, subscriber);
        (actor, client)
    }

    /// Runs the actor's event loop until the request channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "DataState" instead of the full path)
        let slice_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(slice_type, "Slice actor started");

        let mut applied: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SliceRequest::Dispatch { action, respond_to } => {
                    debug!(slice_type, ?action, "Dispatch");
                    self.state.reduce(action);
                    applied += 1;
                    // send_replace never fails, even with no subscribers left
                    self.publisher.send_replace(self.state.clone());
                    let _ = respond_to.send(Ok(()));
                }
                SliceRequest::Snapshot { respond_to } => {
                    debug!(slice_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(slice_type, applied, "Shutdown");
    }
}

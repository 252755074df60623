//! # Mock Store & Testing Guide
//!
//! Utilities for testing code that dispatches to a slice (thunks, views) without
//! asserting on a real [`SliceActor`](crate::SliceActor)'s internals.
//!
//! ## When to use which
//!
//! | Tool | Applies actions | Records actions | Use Case |
//! |------|-----------------|-----------------|----------|
//! | [`MockClient`] | Yes | Yes | Asserting the exact action sequence a thunk dispatches |
//! | [`create_mock_client`] | No | You inspect the channel | Answering or withholding individual requests |
//! | Real `SliceActor` | Yes | No | Testing final state end to end |
//!
//! ## Recording dispatched actions
//!
//! ```rust
//! use slice_framework::mock::MockClient;
//! use slice_framework::Slice;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Flag { on: bool }
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum FlagAction { Set(bool) }
//!
//! impl Slice for Flag {
//!     type Action = FlagAction;
//!     fn reduce(&mut self, action: FlagAction) {
//!         match action { FlagAction::Set(on) => self.on = on }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockClient::new(Flag::default());
//!     let client = mock.client();
//!
//!     client.dispatch(FlagAction::Set(true)).await.unwrap();
//!     client.dispatch(FlagAction::Set(false)).await.unwrap();
//!
//!     mock.verify_actions(&[FlagAction::Set(true), FlagAction::Set(false)]);
//!     assert!(!client.state().on);
//! }
//! ```
//!
//! ## Simulating a closed store
//!
//! Drop the receiver returned by [`create_mock_client`]; every later dispatch fails with
//! [`FrameworkError::ActorClosed`].

use crate::client::SliceClient;
use crate::error::FrameworkError;
use crate::message::SliceRequest;
use crate::slice::Slice;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

/// A store that applies and records every dispatched action.
pub struct MockClient<S: Slice> {
    client: SliceClient<S>,
    actions: Arc<Mutex<Vec<S::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: Slice> MockClient<S>
where
    S::Action: Clone,
{
    /// Creates a recording store holding `initial`.
    pub fn new(initial: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<SliceRequest<S>>(100);
        let (publisher, subscriber) = watch::channel(initial.clone());
        let actions = Arc::new(Mutex::new(Vec::new()));
        let actions_clone = actions.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            let mut state = initial;
            while let Some(request) = receiver.recv().await {
                match request {
                    SliceRequest::Dispatch { action, respond_to } => {
                        actions_clone.lock().unwrap().push(action.clone());
                        state.reduce(action);
                        publisher.send_replace(state.clone());
                        let _ = respond_to.send(Ok(()));
                    }
                    SliceRequest::Snapshot { respond_to } => {
                        let _ = respond_to.send(Ok(state.clone()));
                    }
                }
            }
        });

        Self {
            client: SliceClient::new(sender, subscriber),
            actions,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SliceClient<S> {
        self.client.clone()
    }

    /// Returns every action dispatched so far, in order.
    pub fn actions(&self) -> Vec<S::Action> {
        self.actions.lock().unwrap().clone()
    }

    /// Asserts the dispatched actions equal `expected`, in order.
    pub fn verify_actions(&self, expected: &[S::Action])
    where
        S::Action: PartialEq,
    {
        let actual = self.actions.lock().unwrap();
        assert_eq!(
            actual.as_slice(),
            expected,
            "Dispatched actions did not match expectation"
        );
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Nothing answers requests unless the test does, so this is the tool for pausing a
/// dispatch mid-flight or for simulating a store that has gone away.
pub fn create_mock_client<S: Slice>(
    initial: S,
    buffer_size: usize,
) -> (SliceClient<S>, mpsc::Receiver<SliceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_publisher, subscriber) = watch::channel(initial);
    (SliceClient::new(sender, subscriber), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<(S::Action, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(SliceRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: Slice>(
    receiver: &mut mpsc::Receiver<SliceRequest<S>>,
) -> Option<oneshot::Sender<Result<S, FrameworkError>>> {
    match receiver.recv().await {
        Some(SliceRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

//! # Slice Framework
//!
//! This crate provides the building blocks for an owned, injectable application store.
//! A store is split into **slices**: a plain state type plus a synchronous reducer over
//! its own action enum. Each slice lives inside a [`SliceActor`] task and is reached
//! through a cloneable [`SliceClient`].
//!
//! ## Guarantees
//!
//! - **Single writer**: the actor owns the state and applies actions one at a time, in
//!   the order they arrive.
//! - **No global store**: whoever spawns the actor hands clients to the code that needs
//!   them.
//! - **Published snapshots**: every applied action publishes the new state on a
//!   `tokio::sync::watch` channel, read with [`SliceClient::state`].
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`Slice`]) - your state and its reducer
//! 2. **Runtime Layer** ([`SliceActor`]) - sequential action processing and publishing
//! 3. **Interface Layer** ([`SliceClient`]) - dispatching, reading, subscribing
//! 4. **Effect Layer** ([`Thunk`]) - async command objects that dispatch around I/O
//!
//! ## Example
//!
//! ```rust
//! use slice_framework::{Slice, SliceActor};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter { value: i64 }
//!
//! #[derive(Debug)]
//! enum CounterAction { Add(i64), Reset }
//!
//! impl Slice for Counter {
//!     type Action = CounterAction;
//!
//!     fn reduce(&mut self, action: CounterAction) {
//!         match action {
//!             CounterAction::Add(n) => self.value += n,
//!             CounterAction::Reset => self.value = 0,
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SliceActor::new(Counter::default(), 10);
//!     tokio::spawn(actor.run());
//!
//!     client.dispatch(CounterAction::Add(2)).await.unwrap();
//!     client.dispatch(CounterAction::Add(3)).await.unwrap();
//!     assert_eq!(client.state().value, 5);
//! }
//! ```
//!
//! ## Thunks
//!
//! Work that has to wait on the outside world (an HTTP call, a timer) is expressed as a
//! [`Thunk`]: a value that owns its inputs and, when run, dispatches actions through the
//! client it is given. See the [`thunk`] module.
//!
//! ## Testing
//!
//! The [`mock`] module provides a recording [`MockClient`](mock::MockClient) that applies
//! and remembers every dispatched action, plus low-level helpers that expose the raw
//! request channel.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod slice;
pub mod thunk;
pub mod tracing;

// Re-export core types for convenience
pub use actor::SliceActor;
pub use client::SliceClient;
pub use error::FrameworkError;
pub use message::{Response, SliceRequest};
pub use slice::Slice;
pub use thunk::Thunk;

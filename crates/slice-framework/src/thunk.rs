//! # Thunks
//!
//! A thunk is an async command object: it owns everything it needs (inputs, service
//! handles) and, when run, talks to the outside world and dispatches the actions that
//! describe what happened. Thunks never return a value to their caller; the only
//! observable effect is the state they leave behind.
//!
//! ```rust
//! use async_trait::async_trait;
//! use slice_framework::{Slice, SliceActor, SliceClient, Thunk};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Greeting { text: String }
//!
//! #[derive(Debug)]
//! enum GreetingAction { Set(String) }
//!
//! impl Slice for Greeting {
//!     type Action = GreetingAction;
//!     fn reduce(&mut self, action: GreetingAction) {
//!         match action { GreetingAction::Set(text) => self.text = text }
//!     }
//! }
//!
//! struct LoadGreeting { name: String }
//!
//! #[async_trait]
//! impl Thunk<Greeting> for LoadGreeting {
//!     async fn run(self, store: SliceClient<Greeting>) {
//!         let text = format!("hello, {}", self.name); // imagine an HTTP call here
//!         let _ = store.dispatch(GreetingAction::Set(text)).await;
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SliceActor::new(Greeting::default(), 8);
//!     tokio::spawn(actor.run());
//!
//!     client.dispatch_thunk(LoadGreeting { name: "admin".into() }).await;
//!     assert_eq!(client.state().text, "hello, admin");
//! }
//! ```

use crate::client::SliceClient;
use crate::slice::Slice;
use async_trait::async_trait;

/// An async unit of work run against a slice.
#[async_trait]
pub trait Thunk<S: Slice>: Send + 'static {
    /// Performs the work, dispatching actions through `store`.
    async fn run(self, store: SliceClient<S>);
}

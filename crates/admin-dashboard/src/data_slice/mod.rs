//! # Data Slice
//!
//! The store slice holding fetched products, orders and users, the currently selected
//! product, and the status of the latest operation.
//!
//! ## Structure
//!
//! - [`actions`] - [`DataAction`], the synchronous setters
//! - [`state`] - [`DataState`] and its [`Slice`](slice_framework::Slice) reducer
//! - [`new()`] - Factory that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use admin_dashboard::data_slice::{self, DataAction};
//! use admin_dashboard::model::Status;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = data_slice::new();
//!     tokio::spawn(actor.run());
//!
//!     store.dispatch(DataAction::SetStatus(Status::Success)).await.unwrap();
//!     assert_eq!(store.state().status, Status::Success);
//! }
//! ```

pub mod actions;
pub mod state;

pub use actions::*;
pub use state::*;

use slice_framework::{SliceActor, SliceClient};

/// Creates the data slice actor, starting from [`DataState::default`], and its client.
pub fn new() -> (SliceActor<DataState>, SliceClient<DataState>) {
    SliceActor::new(DataState::default(), 32)
}

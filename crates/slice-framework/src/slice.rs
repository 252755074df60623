//! # Slice Trait
//!
//! The `Slice` trait is the contract a piece of application state implements to be owned
//! by a [`SliceActor`](crate::SliceActor). It names the action type the state accepts and
//! the reducer that applies one action.
//!
//! Reducers are synchronous and infallible: they only replace or adjust fields of the
//! state. Anything that can fail, or has to wait, belongs in a [`Thunk`](crate::Thunk),
//! which then dispatches the plain actions describing the outcome.

use std::fmt::Debug;

/// State managed by a [`SliceActor`](crate::SliceActor).
///
/// # Associated Types
/// The `Action` type ties each slice to its own action enum, so a `DataState` can never
/// receive an action meant for some other slice. The compiler rejects it.
pub trait Slice: Clone + Send + Sync + 'static {
    /// The actions this slice accepts.
    type Action: Send + Debug + 'static;

    /// Applies one action to the state.
    fn reduce(&mut self, action: Self::Action);
}

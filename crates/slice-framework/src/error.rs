//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Reducers cannot fail, so the only things
//! that go wrong here are channel failures between a client and its actor.

/// Errors that can occur within the slice framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Slice actor closed")]
    ActorClosed,
    #[error("Slice actor dropped response channel")]
    ActorDropped,
}

//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for binaries built on this crate.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Slice actor started`, `Shutdown` with the number of applied actions
//! - **Store traffic**: every `Dispatch` with its action at `debug`
//! - **Thunks**: the request each thunk issues and how it resolved
//! - **Failures**: transport and decode errors at `warn`, with the detail that the store
//!   itself never keeps
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p admin-dashboard -- users
//!
//! # Every dispatched action, with its payload
//! RUST_LOG=debug cargo run -p admin-dashboard -- users
//!
//! # Only the store plumbing
//! RUST_LOG=slice_framework=debug cargo run -p admin-dashboard -- users
//! ```
//!
//! With `RUST_LOG=debug` a users fetch reads roughly:
//!
//! ```text
//! INFO Slice actor started slice_type="DataState"
//! DEBUG Dispatch slice_type="DataState" action=SetStatus(Loading)
//! DEBUG operation: Sending request method=GET path="/users" operation="fetch_users"
//! DEBUG Dispatch slice_type="DataState" action=SetStatus(Success)
//! DEBUG Dispatch slice_type="DataState" action=SetUsers([...])
//! INFO Operation finished operation="fetch_users" status=success
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
///
/// Uses the compact format and hides module paths; events carry `slice_type` and
/// operation names as fields instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! # Operations
//!
//! The asynchronous store operations: each issues one request through an
//! [`ApiClient`](crate::api::ApiClient) and records the outcome in the data slice.
//!
//! - [`endpoints`] - [`DataOperation`], its request and its payload decoding
//! - [`thunk`] - [`DataThunk`], the Loading/Success/Error protocol
//! - [`service`] - [`DataService`], one method per operation
//!
//! ```rust
//! use admin_dashboard::api::MockApi;
//! use admin_dashboard::data_slice;
//! use admin_dashboard::model::Status;
//! use admin_dashboard::operations::{DataService, IdPathStyle};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut api = MockApi::new();
//!     api.expect_get("/order").return_status(500);
//!
//!     let (actor, store) = data_slice::new();
//!     tokio::spawn(actor.run());
//!
//!     let service = DataService::new(Arc::new(api), IdPathStyle::default());
//!     service.fetch_orders(&store).await;
//!     assert_eq!(store.state().status, Status::Error);
//! }
//! ```

pub mod endpoints;
pub mod service;
pub mod thunk;

pub use endpoints::{DataOperation, IdPathStyle};
pub use service::DataService;
pub use thunk::DataThunk;

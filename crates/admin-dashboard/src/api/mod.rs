//! The authenticated HTTP collaborator: the [`ApiClient`] trait, its reqwest
//! implementation and an expectation-driven mock.

pub mod client;
pub mod error;
pub mod http;
pub mod mock;

pub use client::*;
pub use error::*;
pub use http::HttpApi;
pub use mock::MockApi;

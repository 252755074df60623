//! # Admin Dashboard Library
//!
//! The data layer of a shop admin dashboard: a store of products, orders and users
//! fed by an authenticated admin API.
//!
//! - **[model]**: Records served by the API and the operation [`Status`](model::Status).
//! - **[data_slice]**: The store slice and its synchronous setters.
//! - **[operations]**: The asynchronous operations and their Loading/Success/Error protocol.
//! - **[api]**: The [`ApiClient`](api::ApiClient) seam, its reqwest implementation and a mock.
//! - **[views]**: The users table.
//! - **[config]**: TOML configuration with env overrides.
//! - **[lifecycle]**: Starting and stopping the store.

pub mod api;
pub mod config;
pub mod data_slice;
pub mod lifecycle;
pub mod model;
pub mod operations;
pub mod views;

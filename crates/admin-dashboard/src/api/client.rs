//! # ApiClient Trait
//!
//! The seam between store operations and the network. Operations only ever see this
//! trait, so tests swap in [`MockApi`](super::MockApi) and the binary uses
//! [`HttpApi`](super::HttpApi).

use super::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Display;

/// HTTP methods used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One request to the admin API.
///
/// `path` is passed exactly as the operation built it, e.g. `admin/product` or
/// `/admin/product42`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }
}

/// A completed HTTP exchange: the status code and the JSON body.
///
/// The body is `Value::Null` when the server sent nothing, or something that is not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Whether the exchange counts as a success. Only `200` does.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// The payload envelope's `data` field.
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }
}

/// The authenticated HTTP collaborator.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Sends one request and returns whatever response came back.
    ///
    /// # Errors
    /// Only when no response could be obtained or read; HTTP error statuses are returned
    /// as ordinary responses.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

//! # Mock API
//!
//! An in-memory [`ApiClient`] driven by a queue of expectations, for testing store
//! operations without a server.
//!
//! ```rust
//! use admin_dashboard::api::{ApiClient, ApiRequest, MockApi};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockApi::new();
//!     mock.expect_get("/users").return_ok(json!({"data": []}));
//!     mock.expect_delete("/order/admin7").return_status(404);
//!
//!     let ok = mock.send(ApiRequest::get("/users")).await.unwrap();
//!     assert_eq!(ok.status, 200);
//!     let missing = mock.send(ApiRequest::delete("/order/admin7")).await.unwrap();
//!     assert_eq!(missing.status, 404);
//!
//!     mock.verify();
//! }
//! ```
//!
//! Requests are matched strictly in order. A request that does not match the next
//! expectation's method and path panics, as does a request with no expectation left.

use super::client::{ApiClient, ApiRequest, ApiResponse, Method};
use super::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Represents an expected request and the canned outcome to return for it.
struct Expectation {
    method: Method,
    path: String,
    delay: Option<Duration>,
    response: Result<ApiResponse, ApiError>,
}

/// A mock API with expectation tracking.
#[derive(Clone, Default)]
pub struct MockApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    received: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `GET` to `path`.
    pub fn expect_get(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, path)
    }

    /// Expects a `POST` to `path`.
    pub fn expect_post(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Post, path)
    }

    /// Expects a `DELETE` to `path`.
    pub fn expect_delete(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Delete, path)
    }

    fn expect(&mut self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn received(&self) -> Vec<ApiRequest> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl ApiClient for MockApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        self.received.lock().unwrap().push(request.clone());

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {} {}", request.method, request.path);
        };
        if expectation.method != request.method || expectation.path != request.path {
            panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.path, request.method, request.path
            );
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the response back for `delay` before returning it.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Responds `200` with `body`.
    pub fn return_ok(self, body: Value) {
        self.respond(Ok(ApiResponse::new(200, body)));
    }

    /// Responds with `status` and an empty body.
    pub fn return_status(self, status: u16) {
        self.respond(Ok(ApiResponse::new(status, Value::Null)));
    }

    /// Responds with `status` and `body`.
    pub fn return_response(self, status: u16, body: Value) {
        self.respond(Ok(ApiResponse::new(status, body)));
    }

    /// Fails the request without a response.
    pub fn return_err(self, error: ApiError) {
        self.respond(Err(error));
    }

    fn respond(self, response: Result<ApiResponse, ApiError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            delay: self.delay,
            response,
        });
    }
}

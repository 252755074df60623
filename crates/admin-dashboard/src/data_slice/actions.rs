//! Synchronous actions for the data slice.
//!
//! These are the only ways [`DataState`](super::DataState) changes. Each one replaces a
//! single field wholesale; none of them can fail.

use crate::model::{OrderData, Product, Status, User};

/// Setters applied by [`DataState::reduce`](slice_framework::Slice::reduce).
#[derive(Debug, Clone, PartialEq)]
pub enum DataAction {
    /// Replaces the status of the latest operation.
    SetStatus(Status),
    /// Replaces the products collection.
    SetProducts(Vec<Product>),
    /// Replaces the orders collection.
    SetOrders(Vec<OrderData>),
    /// Replaces the users collection.
    SetUsers(Vec<User>),
    /// Replaces the selected product.
    SetSingleProduct(Product),
}

//! [`Slice`] implementation for the dashboard's data.

use super::actions::DataAction;
use crate::model::{OrderData, Product, Status, User};
use serde::Serialize;
use slice_framework::Slice;

/// Canonical in-memory copy of everything the dashboard has fetched.
///
/// Starts empty with `status = Loading`. Collections are only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataState {
    pub products: Vec<Product>,
    pub orders: Vec<OrderData>,
    pub users: Vec<User>,
    pub single_product: Option<Product>,
    pub status: Status,
}

impl Slice for DataState {
    type Action = DataAction;

    fn reduce(&mut self, action: DataAction) {
        match action {
            DataAction::SetStatus(status) => self.status = status,
            DataAction::SetProducts(products) => self.products = products,
            DataAction::SetOrders(orders) => self.orders = orders,
            DataAction::SetUsers(users) => self.users = users,
            DataAction::SetSingleProduct(product) => self.single_product = Some(product),
        }
    }
}

//! The asynchronous store operations and the endpoint each one calls.

use crate::api::{ApiError, ApiRequest, ApiResponse};
use crate::data_slice::DataAction;
use crate::model::{OrderData, Product, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const PRODUCTS_PATH: &str = "admin/product";
const ADMIN_PRODUCT_PATH: &str = "/admin/product";
const ORDERS_PATH: &str = "/order";
const USERS_PATH: &str = "/users";
const ADMIN_ORDER_PATH: &str = "/order/admin";

/// How an id is appended to an id-bearing endpoint.
///
/// The admin backend this dashboard was written against receives ids glued straight
/// onto the path (`/admin/product42`). `Slash` inserts a separator for backends that
/// route `/admin/product/42` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPathStyle {
    #[default]
    Concatenate,
    Slash,
}

impl IdPathStyle {
    /// Appends `id` to `base` in this style.
    pub fn join(self, base: &str, id: &str) -> String {
        match self {
            IdPathStyle::Concatenate => format!("{base}{id}"),
            IdPathStyle::Slash => format!("{base}/{id}"),
        }
    }
}

/// One asynchronous store operation.
///
/// | Operation | Method | Path | On success |
/// |---|---|---|---|
/// | `FetchProducts` | GET | `admin/product` | replace products |
/// | `FetchOrders` | GET | `/order` | replace orders |
/// | `FetchUsers` | GET | `/users` | replace users |
/// | `AddProduct` | POST | `/admin/product` | status only |
/// | `DeleteProduct` | DELETE | `/admin/product` + id | status only |
/// | `SingleProduct` | GET | `/admin/product` + id | set the selected product |
/// | `DeleteOrder` | DELETE | `/order/admin` + id | status only |
#[derive(Debug, Clone, PartialEq)]
pub enum DataOperation {
    FetchProducts,
    FetchOrders,
    FetchUsers,
    AddProduct(Product),
    DeleteProduct(String),
    SingleProduct(String),
    DeleteOrder(String),
}

impl DataOperation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            DataOperation::FetchProducts => "fetch_products",
            DataOperation::FetchOrders => "fetch_orders",
            DataOperation::FetchUsers => "fetch_users",
            DataOperation::AddProduct(_) => "add_product",
            DataOperation::DeleteProduct(_) => "delete_product",
            DataOperation::SingleProduct(_) => "single_product",
            DataOperation::DeleteOrder(_) => "delete_order",
        }
    }

    /// The single HTTP request this operation issues.
    pub fn request(&self, style: IdPathStyle) -> ApiRequest {
        match self {
            DataOperation::FetchProducts => ApiRequest::get(PRODUCTS_PATH),
            DataOperation::FetchOrders => ApiRequest::get(ORDERS_PATH),
            DataOperation::FetchUsers => ApiRequest::get(USERS_PATH),
            DataOperation::AddProduct(product) => {
                ApiRequest::post(ADMIN_PRODUCT_PATH, Value::Object(product.0.clone()))
            }
            DataOperation::DeleteProduct(id) => {
                ApiRequest::delete(style.join(ADMIN_PRODUCT_PATH, id))
            }
            DataOperation::SingleProduct(id) => ApiRequest::get(style.join(ADMIN_PRODUCT_PATH, id)),
            DataOperation::DeleteOrder(id) => ApiRequest::delete(style.join(ADMIN_ORDER_PATH, id)),
        }
    }

    /// The action that stores a successful response's payload, if this operation stores
    /// anything.
    ///
    /// # Errors
    /// [`ApiError::Decode`] when a read operation's `data` field is missing or does not
    /// match the expected shape.
    pub fn payload_action(&self, response: &ApiResponse) -> Result<Option<DataAction>, ApiError> {
        let action = match self {
            DataOperation::FetchProducts => {
                DataAction::SetProducts(decode_data::<Vec<Product>>(response)?)
            }
            DataOperation::FetchOrders => {
                DataAction::SetOrders(decode_data::<Vec<OrderData>>(response)?)
            }
            DataOperation::FetchUsers => DataAction::SetUsers(decode_data::<Vec<User>>(response)?),
            DataOperation::SingleProduct(_) => {
                DataAction::SetSingleProduct(decode_data::<Product>(response)?)
            }
            DataOperation::AddProduct(_)
            | DataOperation::DeleteProduct(_)
            | DataOperation::DeleteOrder(_) => return Ok(None),
        };
        Ok(Some(action))
    }
}

fn decode_data<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    let data = response
        .data()
        .cloned()
        .ok_or_else(|| ApiError::Decode("response has no data field".to_string()))?;
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

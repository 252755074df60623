use super::endpoints::{DataOperation, IdPathStyle};
use super::thunk::DataThunk;
use crate::api::ApiClient;
use crate::data_slice::DataState;
use crate::model::Product;
use slice_framework::SliceClient;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Entry points for the seven store operations.
///
/// Each method runs one [`DataThunk`] to completion against the given store. Results
/// are observed through the store's state, never through the return value.
#[derive(Clone)]
pub struct DataService {
    api: Arc<dyn ApiClient>,
    id_style: IdPathStyle,
}

impl DataService {
    pub fn new(api: Arc<dyn ApiClient>, id_style: IdPathStyle) -> Self {
        Self { api, id_style }
    }

    /// Binds `operation` to this service's API.
    pub fn thunk(&self, operation: DataOperation) -> DataThunk {
        DataThunk::new(operation, self.api.clone(), self.id_style)
    }

    /// Runs `operation` against `store` and waits for its outcome.
    pub async fn run(&self, store: &SliceClient<DataState>, operation: DataOperation) {
        store.dispatch_thunk(self.thunk(operation)).await
    }

    /// Runs `operation` on its own task.
    pub fn spawn(&self, store: &SliceClient<DataState>, operation: DataOperation) -> JoinHandle<()> {
        store.spawn_thunk(self.thunk(operation))
    }

    /// `GET admin/product`, replacing `products` on success.
    pub async fn fetch_products(&self, store: &SliceClient<DataState>) {
        self.run(store, DataOperation::FetchProducts).await
    }

    /// `GET /order`, replacing `orders` on success.
    pub async fn fetch_orders(&self, store: &SliceClient<DataState>) {
        self.run(store, DataOperation::FetchOrders).await
    }

    /// `GET /users`, replacing `users` on success.
    pub async fn fetch_users(&self, store: &SliceClient<DataState>) {
        self.run(store, DataOperation::FetchUsers).await
    }

    /// `POST /admin/product` with the product as the JSON body.
    pub async fn add_product(&self, store: &SliceClient<DataState>, product: Product) {
        self.run(store, DataOperation::AddProduct(product)).await
    }

    /// `DELETE /admin/product{id}`. The local product list is left as it is.
    pub async fn delete_product(&self, store: &SliceClient<DataState>, id: impl Into<String>) {
        self.run(store, DataOperation::DeleteProduct(id.into())).await
    }

    /// `GET /admin/product{id}`, selecting the returned product on success.
    pub async fn single_product(&self, store: &SliceClient<DataState>, id: impl Into<String>) {
        self.run(store, DataOperation::SingleProduct(id.into())).await
    }

    /// `DELETE /order/admin{id}`. The local order list is left as it is.
    pub async fn delete_order(&self, store: &SliceClient<DataState>, id: impl Into<String>) {
        self.run(store, DataOperation::DeleteOrder(id.into())).await
    }
}

//! The status protocol every operation follows.
//!
//! 1. Dispatch `SetStatus(Loading)`.
//! 2. Issue the operation's request.
//! 3. On `200`, dispatch `SetStatus(Success)` and then the payload action, if any.
//! 4. On any other status, a transport failure or an undecodable payload, dispatch
//!    `SetStatus(Error)`.
//!
//! Failures never reach the caller; the store's `status` is the only signal.

use super::endpoints::{DataOperation, IdPathStyle};
use crate::api::ApiClient;
use crate::data_slice::{DataAction, DataState};
use crate::model::Status;
use async_trait::async_trait;
use slice_framework::{FrameworkError, SliceClient, Thunk};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A [`DataOperation`] bound to the API it calls.
#[derive(Clone)]
pub struct DataThunk {
    operation: DataOperation,
    api: Arc<dyn ApiClient>,
    id_style: IdPathStyle,
}

impl DataThunk {
    pub fn new(operation: DataOperation, api: Arc<dyn ApiClient>, id_style: IdPathStyle) -> Self {
        Self {
            operation,
            api,
            id_style,
        }
    }

    pub fn operation(&self) -> &DataOperation {
        &self.operation
    }

    /// Runs the protocol and returns the final status it recorded.
    ///
    /// Only a store that has shut down is reported as an error.
    #[instrument(name = "operation", skip_all, fields(operation = self.operation.name()))]
    pub async fn execute(self, store: &SliceClient<DataState>) -> Result<Status, FrameworkError> {
        store.dispatch(DataAction::SetStatus(Status::Loading)).await?;

        let request = self.operation.request(self.id_style);
        debug!(method = %request.method, path = %request.path, "Sending request");

        let update = match self.api.send(request).await {
            Ok(response) if response.is_ok() => match self.operation.payload_action(&response) {
                Ok(update) => Some(update),
                Err(e) => {
                    warn!(error = %e, "Rejected response payload");
                    None
                }
            },
            Ok(response) => {
                warn!(status = response.status, "Request failed");
                None
            }
            Err(e) => {
                warn!(error = %e, "Request errored");
                None
            }
        };

        match update {
            Some(payload) => {
                store.dispatch(DataAction::SetStatus(Status::Success)).await?;
                if let Some(action) = payload {
                    store.dispatch(action).await?;
                }
                Ok(Status::Success)
            }
            None => {
                store.dispatch(DataAction::SetStatus(Status::Error)).await?;
                Ok(Status::Error)
            }
        }
    }
}

#[async_trait]
impl Thunk<DataState> for DataThunk {
    async fn run(self, store: SliceClient<DataState>) {
        let name = self.operation.name();
        match self.execute(&store).await {
            Ok(status) => info!(operation = name, %status, "Operation finished"),
            Err(e) => warn!(operation = name, error = %e, "Store unavailable, operation abandoned"),
        }
    }
}

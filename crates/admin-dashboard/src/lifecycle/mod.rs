//! # System Lifecycle
//!
//! [`DashboardSystem`] starts the data slice actor, wires it to the API, and shuts it
//! down again.
//!
//! ## Graceful Shutdown
//!
//! The actor stops once every [`SliceClient`] is dropped:
//!
//! 1. **Drop all clients** - [`shutdown`](DashboardSystem::shutdown) drops the system's
//!    own; views and spawned operations must have released theirs
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the actor task is joined
//!
//! A client still held elsewhere keeps the actor alive and `shutdown` waits for it.

use crate::api::ApiClient;
use crate::data_slice::{self, DataState};
use crate::operations::{DataService, IdPathStyle};
use crate::views::UsersTable;
use slice_framework::SliceClient;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running dashboard: one data store and the service that feeds it.
pub struct DashboardSystem {
    /// Client for the data slice
    pub store: SliceClient<DataState>,

    /// Operations bound to the configured API
    pub service: DataService,

    handle: JoinHandle<()>,
}

impl DashboardSystem {
    /// Spawns the data slice actor and binds the operations to `api`.
    pub fn new(api: Arc<dyn ApiClient>, id_style: IdPathStyle) -> Self {
        let (actor, store) = data_slice::new();
        let handle = tokio::spawn(actor.run());

        Self {
            store,
            service: DataService::new(api, id_style),
            handle,
        }
    }

    /// A users table over this system's store.
    pub fn users_table(&self) -> UsersTable {
        UsersTable::new(self.store.clone(), self.service.clone())
    }

    /// Closes the store and waits for its actor to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard...");

        drop(self.store);
        drop(self.service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use super::{Dispatch, StoreError, StoreRequest};
use crate::action::Action;
use crate::model::ResourceState;

/// Handle to a running [`ResourceStore`](super::ResourceStore).
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
    watcher: watch::Receiver<ResourceState>,
    resource: Arc<str>,
}

impl StoreClient {
    pub fn new(
        sender: mpsc::Sender<StoreRequest>,
        watcher: watch::Receiver<ResourceState>,
        resource: &str,
    ) -> Self {
        Self {
            sender,
            watcher,
            resource: Arc::from(resource),
        }
    }

    /// Current state as seen by the store task.
    pub async fn state(&self) -> Result<ResourceState, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetState { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// A receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState> {
        self.watcher.clone()
    }

    pub fn resource_name(&self) -> &str {
        &self.resource
    }
}

#[async_trait]
impl Dispatch for StoreClient {
    #[instrument(skip(self, action), fields(resource = %self.resource, action_type = %action.action_type))]
    async fn dispatch(&self, action: Action) -> Result<ResourceState, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }
}

//! # Resource Store
//!
//! The reducer is pure; something still has to own the current state and
//! apply actions one at a time. [`ResourceStore`] is that single writer: a
//! task that drains an `mpsc` channel, runs the reducer for each action and
//! publishes every changed state on a `watch` channel for any number of
//! readers.
//!
//! ```text
//! StoreClient ──StoreRequest──▶ ResourceStore ──watch──▶ subscribers
//!                                   │
//!                              Reducer::reduce
//! ```

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use super::StoreClient;
use crate::action::Action;
use crate::model::ResourceState;
use crate::reducer::Reducer;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

/// Messages the store task accepts.
#[derive(Debug)]
pub enum StoreRequest {
    Dispatch {
        action: Action,
        respond_to: Response<ResourceState>,
    },
    GetState {
        respond_to: Response<ResourceState>,
    },
}

/// Owns the state of one resource and serializes every transition.
pub struct ResourceStore {
    receiver: mpsc::Receiver<StoreRequest>,
    reducer: Reducer,
    state: ResourceState,
    publisher: watch::Sender<ResourceState>,
}

impl ResourceStore {
    /// Creates the store (not yet running) and a client for it, starting
    /// from the reducer's initial state.
    pub fn new(reducer: Reducer, buffer_size: usize) -> (Self, StoreClient) {
        let state = reducer.initial_state().clone();
        Self::with_state(reducer, state, buffer_size)
    }

    pub fn with_state(reducer: Reducer, state: ResourceState, buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(state.clone());
        let client = StoreClient::new(sender, watcher, reducer.resource_name());
        let store = Self {
            receiver,
            reducer,
            state,
            publisher,
        };
        (store, client)
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        let resource = self.reducer.resource_name().to_string();
        info!(%resource, "Store started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StoreRequest::Dispatch { action, respond_to } => {
                    let next = self.reducer.reduce(Some(&self.state), &action);
                    let changed = !next.ptr_eq(&self.state);
                    self.state = next;
                    if changed {
                        self.publisher.send_replace(self.state.clone());
                    }
                    debug!(%resource, action_type = %action.action_type, changed, "Dispatched");
                    let _ = respond_to.send(self.state.clone());
                }
                StoreRequest::GetState { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(%resource, size = self.state.len(), "Shutdown");
    }
}

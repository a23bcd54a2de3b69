use async_trait::async_trait;
use std::fmt::Display;
use std::future::Future;
use tokio::sync::oneshot;
use tracing::{info, instrument, warn};

use super::{StoreError, TrackError};
use crate::action::Action;
use crate::action_types::{Operation, Phase};
use crate::model::{Entity, ResourceId, ResourceState};
use crate::resource::Resource;

/// Anything actions can be sent to: the real store client or a mock.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Applies `action` and returns the resulting state.
    async fn dispatch(&self, action: Action) -> Result<ResourceState, StoreError>;
}

/// Brackets a network request with lifecycle actions.
///
/// The tracker never performs I/O itself; the caller hands it the request
/// future and it dispatches attempt, then succeed or fail, around it.
pub struct RequestTracker<D> {
    dispatcher: D,
    resource: Resource,
}

impl<D: Dispatch> RequestTracker<D> {
    pub fn new(dispatcher: D, resource: Resource) -> Self {
        Self { dispatcher, resource }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Dispatches attempt, awaits `request`, then dispatches succeed with the
    /// returned entities or fail with the error text.
    #[instrument(skip(self, ids, request), fields(resource = %self.resource.name()))]
    pub async fn track<F, E>(
        &self,
        operation: Operation,
        ids: Vec<ResourceId>,
        request: F,
    ) -> Result<ResourceState, TrackError<E>>
    where
        F: Future<Output = Result<Vec<Entity>, E>> + Send,
        E: Display + Send,
    {
        self.transition(operation, Phase::Attempt, &ids).await?;
        self.settle(operation, &ids, request.await).await
    }

    /// Like [`track`](Self::track), but dispatches abort and gives up on the
    /// request if `cancel` fires first.
    #[instrument(skip(self, ids, request, cancel), fields(resource = %self.resource.name()))]
    pub async fn track_until<F, E>(
        &self,
        operation: Operation,
        ids: Vec<ResourceId>,
        request: F,
        cancel: oneshot::Receiver<()>,
    ) -> Result<ResourceState, TrackError<E>>
    where
        F: Future<Output = Result<Vec<Entity>, E>> + Send,
        E: Display + Send,
    {
        self.transition(operation, Phase::Attempt, &ids).await?;
        tokio::select! {
            outcome = request => self.settle(operation, &ids, outcome).await,
            Ok(()) = cancel => {
                info!(%operation, "Request cancelled");
                self.abort(operation, &ids).await?;
                Err(TrackError::Aborted)
            }
        }
    }

    /// Dispatches the abort action for `operation`.
    pub async fn abort(&self, operation: Operation, ids: &[ResourceId]) -> Result<ResourceState, StoreError> {
        self.transition(operation, Phase::Abort, ids).await
    }

    /// Dispatches the reset action, e.g. to let a UI retry after a failure.
    pub async fn reset(&self, operation: Operation, ids: &[ResourceId]) -> Result<ResourceState, StoreError> {
        self.transition(operation, Phase::Reset, ids).await
    }

    async fn settle<E: Display>(
        &self,
        operation: Operation,
        ids: &[ResourceId],
        outcome: Result<Vec<Entity>, E>,
    ) -> Result<ResourceState, TrackError<E>> {
        match outcome {
            Ok(entities) => {
                let action = self.action(operation, Phase::Succeed, ids)?.with_resources(entities);
                Ok(self.dispatcher.dispatch(action).await?)
            }
            Err(error) => {
                warn!(%operation, error = %error, "Request failed");
                let action = self
                    .action(operation, Phase::Fail, ids)?
                    .with_error(error.to_string());
                self.dispatcher.dispatch(action).await?;
                Err(TrackError::Request(error))
            }
        }
    }

    async fn transition(
        &self,
        operation: Operation,
        phase: Phase,
        ids: &[ResourceId],
    ) -> Result<ResourceState, StoreError> {
        let action = self.action(operation, phase, ids)?;
        self.dispatcher.dispatch(action).await
    }

    fn action(&self, operation: Operation, phase: Phase, ids: &[ResourceId]) -> Result<Action, StoreError> {
        let action = self
            .resource
            .action(operation, phase)
            .ok_or_else(|| StoreError::Unsupported {
                resource: self.resource.name().to_string(),
                operation,
            })?;
        Ok(match (operation.is_many(), ids.first()) {
            (true, _) => action.with_ids(ids.iter().cloned()),
            (false, Some(id)) => action.with_id(id.clone()),
            (false, None) => action,
        })
    }
}

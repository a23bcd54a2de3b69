//! Error types for the store runtime.

use thiserror::Error;

use crate::action_types::Operation;

/// Errors raised by the store plumbing. Failures of the tracked request
/// itself are state (`FAILED`), never a `StoreError`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Operation {operation} is not enabled for resource {resource}")]
    Unsupported { resource: String, operation: Operation },
}

/// Outcome of a tracked request that did not succeed.
#[derive(Debug, Error)]
pub enum TrackError<E> {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The request failed; a fail action has already been dispatched.
    #[error("Request failed: {0}")]
    Request(E),
    /// The caller cancelled; an abort action has already been dispatched.
    #[error("Request aborted")]
    Aborted,
}

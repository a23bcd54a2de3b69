//! Error types for resource setup.

use thiserror::Error;

use crate::model::ResourceId;

/// Configuration errors, raised by [`create_resource`](super::create_resource)
/// before any action is dispatched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    #[error("Resource name must not be empty")]
    EmptyResourceName,

    /// The name has no alphanumeric characters to build action types from.
    #[error("Invalid resource name: {0:?}")]
    InvalidResourceName(String),

    #[error("Plural form must not be empty")]
    EmptyPluralForm,

    #[error("Id attribute must not be empty")]
    EmptyIdAttribute,

    #[error("Custom action type must not be empty")]
    EmptyCustomActionType,

    #[error("Custom action type registered twice: {0}")]
    DuplicateCustomActionType(String),

    #[error("Initial resource is missing id attribute {0:?}")]
    MissingInitialId(String),

    #[error("Duplicate id in initial resources: {0}")]
    DuplicateInitialId(ResourceId),

    #[error("Entity must be a JSON object, got {0}")]
    EntityNotObject(String),
}

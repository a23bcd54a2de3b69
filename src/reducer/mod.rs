//! # Reducer Core
//!
//! [`Reducer::reduce`] is a pure `(state, action) -> state` function. For a
//! given pair it always returns the same result and never mutates its input.
//!
//! ## Dispatch precedence
//!
//! 1. Actions for another resource name pass through unchanged.
//! 2. A registered [`ActionReducer`] for the action type wins over everything,
//!    including a built-in entry with the same type.
//! 3. Built-in lifecycle entries from the [`ActionTypes`] catalog.
//! 4. Anything else passes through unchanged.
//!
//! "Unchanged" means the returned state shares all three parts with the input.

mod custom;
mod transitions;

pub use custom::*;

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::action_types::{ActionKind, ActionTypes};
use crate::model::ResourceState;

/// The configured state machine for one resource. Cheap to clone.
#[derive(Clone)]
pub struct Reducer {
    inner: Arc<ReducerInner>,
}

struct ReducerInner {
    resource_name: String,
    id_attribute: String,
    action_types: ActionTypes,
    custom: HashMap<String, ReducerFn>,
    initial_state: ResourceState,
}

impl Reducer {
    pub(crate) fn new(
        resource_name: String,
        id_attribute: String,
        action_types: ActionTypes,
        action_reducers: &[ActionReducer],
        initial_state: ResourceState,
    ) -> Self {
        let mut custom = HashMap::new();
        for action_reducer in action_reducers {
            if matches!(
                action_types.resolve(&action_reducer.action_type),
                Some(ActionKind::Lifecycle { .. })
            ) {
                warn!(
                    resource = %resource_name,
                    action_type = %action_reducer.action_type,
                    "Custom reducer overrides built-in action type"
                );
            }
            custom.insert(action_reducer.action_type.clone(), action_reducer.reducer.clone());
        }

        Self {
            inner: Arc::new(ReducerInner {
                resource_name,
                id_attribute,
                action_types,
                custom,
                initial_state,
            }),
        }
    }

    /// Computes the next state. `None` stands for "no state yet" and uses the
    /// configured initial state.
    pub fn reduce(&self, state: Option<&ResourceState>, action: &Action) -> ResourceState {
        let inner = &*self.inner;
        let state = state.unwrap_or(&inner.initial_state);

        if action.resource_name != inner.resource_name {
            trace!(
                resource = %inner.resource_name,
                action_resource = %action.resource_name,
                action_type = %action.action_type,
                "Ignoring action for another resource"
            );
            return state.clone();
        }

        if let Some(custom) = inner.custom.get(&action.action_type) {
            debug!(resource = %inner.resource_name, action_type = %action.action_type, "Custom reducer");
            return custom(state, action);
        }

        match inner.action_types.resolve(&action.action_type) {
            Some(ActionKind::Lifecycle { operation, phase }) => {
                debug!(
                    resource = %inner.resource_name,
                    action_type = %action.action_type,
                    %operation,
                    %phase,
                    "Reduce"
                );
                transitions::apply(state, action, operation, phase, &inner.id_attribute)
            }
            Some(ActionKind::Custom) | None => {
                trace!(resource = %inner.resource_name, action_type = %action.action_type, "Unhandled action type");
                state.clone()
            }
        }
    }

    /// Folds a sequence of actions, starting from `state` (or the initial state).
    pub fn reduce_all<'a>(
        &self,
        state: Option<&ResourceState>,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> ResourceState {
        let start = state.unwrap_or(&self.inner.initial_state).clone();
        actions
            .into_iter()
            .fold(start, |current, action| self.reduce(Some(&current), action))
    }

    pub fn resource_name(&self) -> &str {
        &self.inner.resource_name
    }

    pub fn id_attribute(&self) -> &str {
        &self.inner.id_attribute
    }

    pub fn action_types(&self) -> &ActionTypes {
        &self.inner.action_types
    }

    pub fn initial_state(&self) -> &ResourceState {
        &self.inner.initial_state
    }
}

impl std::fmt::Debug for Reducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reducer")
            .field("resource_name", &self.inner.resource_name)
            .field("id_attribute", &self.inner.id_attribute)
            .field("action_types", &self.inner.action_types.len())
            .field("custom", &self.inner.custom.len())
            .finish()
    }
}

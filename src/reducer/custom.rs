use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::model::ResourceState;

/// Signature every custom reducer shares.
pub type ReducerFn = Arc<dyn Fn(&ResourceState, &Action) -> ResourceState + Send + Sync>;

/// A user-supplied handler for one action type.
///
/// The handler receives the whole state and returns the whole next state.
/// It is expected to keep the collection invariants: unique ids in
/// `resources`, and untouched parts shared with the input. Nothing checks this.
#[derive(Clone)]
pub struct ActionReducer {
    pub action_type: String,
    pub reducer: ReducerFn,
}

impl ActionReducer {
    pub fn new<F>(action_type: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&ResourceState, &Action) -> ResourceState + Send + Sync + 'static,
    {
        Self {
            action_type: action_type.into(),
            reducer: Arc::new(reducer),
        }
    }
}

impl fmt::Debug for ActionReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionReducer")
            .field("action_type", &self.action_type)
            .finish_non_exhaustive()
    }
}

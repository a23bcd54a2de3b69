//! # Mock Dispatcher
//!
//! Utilities for testing code that dispatches actions, without spawning a
//! store task.
//!
//! [`MockDispatcher`] applies a real [`Reducer`] in memory and records every
//! action it receives. Queue expectations with
//! [`expect_dispatch`](MockDispatcher::expect_dispatch) to check the order of
//! action types or to inject store failures, then call
//! [`verify`](MockDispatcher::verify).
//!
//! ```ignore
//! let mock = MockDispatcher::new(resource.reducer().clone());
//! mock.expect_dispatch("READ_MANY_BOOKS").return_ok();
//! mock.expect_dispatch("READ_MANY_BOOKS_SUCCEED").return_err(StoreError::StoreClosed);
//! // exercise code under test...
//! mock.verify();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Dispatch, StoreError};
use crate::action::Action;
use crate::model::ResourceState;
use crate::reducer::Reducer;

struct Expectation {
    action_type: String,
    response: Result<(), StoreError>,
}

#[derive(Default)]
struct Recorded {
    state: Option<ResourceState>,
    dispatched: Vec<Action>,
    expectations: VecDeque<Expectation>,
}

/// In-memory [`Dispatch`] implementation with expectation tracking.
#[derive(Clone)]
pub struct MockDispatcher {
    reducer: Reducer,
    recorded: Arc<Mutex<Recorded>>,
}

fn lock(recorded: &Mutex<Recorded>) -> MutexGuard<'_, Recorded> {
    recorded.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockDispatcher {
    pub fn new(reducer: Reducer) -> Self {
        Self {
            reducer,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    /// Expects the next dispatch to carry `action_type`.
    pub fn expect_dispatch(&self, action_type: impl Into<String>) -> DispatchExpectationBuilder {
        DispatchExpectationBuilder {
            action_type: action_type.into(),
            recorded: self.recorded.clone(),
        }
    }

    /// Every action received so far, in arrival order.
    pub fn dispatched(&self) -> Vec<Action> {
        lock(&self.recorded).dispatched.clone()
    }

    pub fn action_types(&self) -> Vec<String> {
        lock(&self.recorded)
            .dispatched
            .iter()
            .map(|action| action.action_type.clone())
            .collect()
    }

    /// Current state: the reducer's initial state until something is applied.
    pub fn state(&self) -> ResourceState {
        lock(&self.recorded)
            .state
            .clone()
            .unwrap_or_else(|| self.reducer.initial_state().clone())
    }

    /// Panics if queued expectations were not consumed.
    pub fn verify(&self) {
        let recorded = lock(&self.recorded);
        if !recorded.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                recorded.expectations.len()
            );
        }
    }
}

#[async_trait]
impl Dispatch for MockDispatcher {
    async fn dispatch(&self, action: Action) -> Result<ResourceState, StoreError> {
        let mut recorded = lock(&self.recorded);
        recorded.dispatched.push(action.clone());

        if let Some(expectation) = recorded.expectations.pop_front() {
            if expectation.action_type != action.action_type {
                panic!(
                    "Unexpected dispatch: expected {}, got {}",
                    expectation.action_type, action.action_type
                );
            }
            expectation.response?;
        }

        let next = self.reducer.reduce(recorded.state.as_ref(), &action);
        recorded.state = Some(next.clone());
        Ok(next)
    }
}

/// Builder for dispatch expectations.
pub struct DispatchExpectationBuilder {
    action_type: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl DispatchExpectationBuilder {
    /// The dispatch is applied normally.
    pub fn return_ok(self) {
        lock(&self.recorded).expectations.push_back(Expectation {
            action_type: self.action_type,
            response: Ok(()),
        });
    }

    /// The dispatch is recorded but not applied, and `error` is returned.
    pub fn return_err(self, error: StoreError) {
        lock(&self.recorded).expectations.push_back(Expectation {
            action_type: self.action_type,
            response: Err(error),
        });
    }
}

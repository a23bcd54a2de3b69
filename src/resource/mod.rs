//! # Resource Setup
//!
//! [`create_resource`] turns a resource name plus [`ResourceOptions`] into a
//! [`Resource`]: its action-type catalog, its initial state and its
//! [`Reducer`]. All configuration problems surface here, not at dispatch.

mod error;
mod options;

pub use error::*;
pub use options::*;

use std::collections::HashSet;
use tracing::info;

use crate::action::Action;
use crate::action_types::{plural_form, snake_case, ActionTypes, Operation, Phase};
use crate::model::ResourceState;
use crate::reducer::Reducer;

/// Everything generated for one resource.
#[derive(Debug, Clone)]
pub struct Resource {
    name: String,
    plural_form: String,
    reducer: Reducer,
}

impl Resource {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The plural in its original casing, e.g. `catPeople`.
    pub fn plural_form(&self) -> &str {
        &self.plural_form
    }

    pub fn action_types(&self) -> &ActionTypes {
        self.reducer.action_types()
    }

    pub fn initial_state(&self) -> &ResourceState {
        self.reducer.initial_state()
    }

    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    /// An action for this resource, or `None` when the operation is disabled.
    pub fn action(&self, operation: Operation, phase: Phase) -> Option<Action> {
        self.action_types()
            .name_of(operation, phase)
            .map(|action_type| Action::new(action_type, self.name.as_str()))
    }

    pub fn reduce(&self, state: Option<&ResourceState>, action: &Action) -> ResourceState {
        self.reducer.reduce(state, action)
    }
}

/// Builds a resource named `resource_name` (singular, e.g. `book`).
pub fn create_resource(resource_name: &str, options: ResourceOptions) -> Result<Resource, ResourceError> {
    if resource_name.trim().is_empty() {
        return Err(ResourceError::EmptyResourceName);
    }
    if snake_case(resource_name).is_empty() {
        return Err(ResourceError::InvalidResourceName(resource_name.to_string()));
    }

    let ResourceOptions {
        initial_state,
        id_attribute,
        plural_form: plural_override,
        supported_actions,
        action_reducers,
    } = options;

    let plural = plural_form(resource_name, plural_override.as_deref());
    if snake_case(&plural).is_empty() {
        return Err(ResourceError::EmptyPluralForm);
    }

    let id_attribute = id_attribute.unwrap_or_else(|| "id".to_string());
    if id_attribute.is_empty() {
        return Err(ResourceError::EmptyIdAttribute);
    }

    let mut custom_types = HashSet::new();
    for action_reducer in &action_reducers {
        if action_reducer.action_type.is_empty() {
            return Err(ResourceError::EmptyCustomActionType);
        }
        if !custom_types.insert(action_reducer.action_type.as_str()) {
            return Err(ResourceError::DuplicateCustomActionType(
                action_reducer.action_type.clone(),
            ));
        }
    }

    let initial = initial_state.build(&id_attribute)?;
    let action_types = ActionTypes::generate(
        resource_name,
        &plural,
        &supported_actions,
        action_reducers.iter().map(|r| r.action_type.as_str()),
    );

    info!(
        resource = resource_name,
        plural = %plural,
        action_types = action_types.len(),
        custom = action_reducers.len(),
        "Resource created"
    );

    let reducer = Reducer::new(
        resource_name.to_string(),
        id_attribute,
        action_types,
        &action_reducers,
        initial,
    );

    Ok(Resource {
        name: resource_name.to_string(),
        plural_form: plural,
        reducer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::ActionReducer;

    #[test]
    fn rejects_malformed_options() {
        assert_eq!(
            create_resource("", ResourceOptions::default()).unwrap_err(),
            ResourceError::EmptyResourceName
        );
        assert_eq!(
            create_resource("--", ResourceOptions::default()).unwrap_err(),
            ResourceError::InvalidResourceName("--".into())
        );
        assert_eq!(
            create_resource("book", ResourceOptions::default().with_plural_form("")).unwrap_err(),
            ResourceError::EmptyPluralForm
        );
        assert_eq!(
            create_resource("book", ResourceOptions::default().with_id_attribute("")).unwrap_err(),
            ResourceError::EmptyIdAttribute
        );
    }

    #[test]
    fn rejects_bad_custom_action_types() {
        let noop = |state: &ResourceState, _: &Action| state.clone();
        let duplicate = ResourceOptions::default()
            .with_action_reducer(ActionReducer::new("SHELVE", noop))
            .with_action_reducer(ActionReducer::new("SHELVE", noop));
        assert_eq!(
            create_resource("book", duplicate).unwrap_err(),
            ResourceError::DuplicateCustomActionType("SHELVE".into())
        );

        let empty = ResourceOptions::default().with_action_reducer(ActionReducer::new("", noop));
        assert_eq!(
            create_resource("book", empty).unwrap_err(),
            ResourceError::EmptyCustomActionType
        );
    }

    #[test]
    fn typed_action_creator() {
        let resource = create_resource("catPerson", ResourceOptions::default().with_plural_form("catPeople")).unwrap();
        let action = resource.action(Operation::ReadMany, Phase::Succeed).unwrap();
        assert_eq!(action.action_type, "READ_MANY_CAT_PEOPLE_SUCCEED");
        assert_eq!(action.resource_name, "catPerson");
        assert_eq!(resource.plural_form(), "catPeople");
    }
}

use std::collections::BTreeMap;

use super::{snake_case, Operation, Phase, SupportedActions};

/// What an action-type string means to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Lifecycle { operation: Operation, phase: Phase },
    /// Handled by a user-registered [`ActionReducer`](crate::reducer::ActionReducer).
    Custom,
}

/// The closed vocabulary of action types one resource responds to.
///
/// Built once at setup; the reducer resolves incoming type strings against it
/// rather than pattern-matching on suffixes at dispatch time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTypes {
    entries: BTreeMap<String, ActionKind>,
}

impl ActionTypes {
    /// Builds the catalog for `name` (singular) and `plural`, both in their
    /// original casing.
    pub fn generate<'a>(
        name: &str,
        plural: &str,
        supported: &SupportedActions,
        custom: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let singular = snake_case(name);
        let plural = snake_case(plural);
        let mut entries = BTreeMap::new();

        for operation in supported.enabled() {
            let base = operation.base_action_type(&singular, &plural);
            for phase in Phase::ALL {
                entries.insert(
                    format!("{base}{}", phase.suffix()),
                    ActionKind::Lifecycle { operation, phase },
                );
            }
        }
        for action_type in custom {
            entries.insert(action_type.to_string(), ActionKind::Custom);
        }

        Self { entries }
    }

    /// The action-type string itself, if the catalog contains it.
    pub fn get(&self, action_type: &str) -> Option<&str> {
        self.entries
            .get_key_value(action_type)
            .map(|(key, _)| key.as_str())
    }

    pub fn resolve(&self, action_type: &str) -> Option<ActionKind> {
        self.entries.get(action_type).copied()
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.entries.contains_key(action_type)
    }

    /// The type string for a lifecycle transition, if that operation is enabled.
    pub fn name_of(&self, operation: Operation, phase: Phase) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, kind)| **kind == ActionKind::Lifecycle { operation, phase })
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ActionKind)> {
        self.entries.iter().map(|(key, kind)| (key.as_str(), *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_lifecycle_entries() {
        let types = ActionTypes::generate("book", "books", &SupportedActions::default(), []);
        assert_eq!(
            types.resolve("UPDATE_MANY_BOOKS_FAIL"),
            Some(ActionKind::Lifecycle {
                operation: Operation::UpdateMany,
                phase: Phase::Fail
            })
        );
        assert_eq!(types.name_of(Operation::Read, Phase::Reset), Some("READ_BOOK_RESET"));
        assert_eq!(types.resolve("READ_BOOKS"), None);
    }

    #[test]
    fn custom_entries_survive_with_everything_disabled() {
        let types = ActionTypes::generate("book", "books", &SupportedActions::none(), ["SHELVE"]);
        assert_eq!(types.len(), 1);
        assert_eq!(types.resolve("SHELVE"), Some(ActionKind::Custom));
        assert_eq!(types.name_of(Operation::Create, Phase::Attempt), None);
    }
}

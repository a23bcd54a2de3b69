use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ResourceId;
use crate::resource::ResourceError;

/// One record of the managed resource: an opaque JSON object.
///
/// Entities are never mutated once they live in a [`ResourceState`](super::ResourceState);
/// merges build a new entity and the collection swaps the `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

impl Entity {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The value of `id_attr`, if it holds an integer or a string.
    pub fn id(&self, id_attr: &str) -> Option<ResourceId> {
        self.0.get(id_attr).and_then(ResourceId::from_value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Builder-style field setter, mostly for tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Shallow field-wise merge: fields of `incoming` win, fields only present
    /// in `self` survive.
    pub fn merged(&self, incoming: &Entity) -> Entity {
        let mut fields = self.0.clone();
        for (key, value) in &incoming.0 {
            fields.insert(key.clone(), value.clone());
        }
        Entity(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Entity {
    type Error = ResourceError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(ResourceError::EntityNotObject(other.to_string())),
        }
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Value::Object(entity.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_keeps_stored_fields_and_lets_incoming_win() {
        let stored = Entity::try_from(json!({"id": 1, "first_name": "james", "last_name": "please"})).unwrap();
        let incoming = Entity::try_from(json!({"id": 1, "first_name": "oink"})).unwrap();

        let merged = stored.merged(&incoming);
        assert_eq!(
            Value::from(merged),
            json!({"id": 1, "first_name": "oink", "last_name": "please"})
        );
    }

    #[test]
    fn non_objects_are_rejected() {
        let err = Entity::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ResourceError::EntityNotObject(_)));
    }

    #[test]
    fn id_uses_the_configured_attribute() {
        let entity = Entity::new().with("uuid", "a-1").with("id", 7);
        assert_eq!(entity.id("uuid"), Some(ResourceId::from("a-1")));
        assert_eq!(entity.id("id"), Some(ResourceId::from(7)));
        assert_eq!(entity.id("missing"), None);
    }
}

//! The action object the reducer consumes.
//!
//! Actions arrive from a shared stream, so every field except `type` and
//! `resourceName` is optional. Unknown JSON fields are kept in `extra` for
//! custom reducers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::{Entity, ResourceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    pub resource_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<ResourceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Entity>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Entity>,
    /// Upsert mode for `readMany` succeed; merge when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    /// Failure payload carried by fail actions. The reducer does not store it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Producers often send `"ids": null` instead of leaving the field out.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Action {
    pub fn new(action_type: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            resource_name: resource_name.into(),
            id: None,
            ids: Vec::new(),
            resource: None,
            resources: Vec::new(),
            replace: None,
            error: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ResourceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ResourceId>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resource(mut self, resource: Entity) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_resources(mut self, resources: Vec<Entity>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn with_error(mut self, error: impl Into<Value>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(field.into(), value.into());
        self
    }

    /// Payload entities: `resource` first, then `resources`.
    pub fn payload(&self) -> Vec<Entity> {
        self.resource
            .iter()
            .chain(self.resources.iter())
            .cloned()
            .collect()
    }

    /// Ids for a singular operation: `id`, else the first payload entity's id.
    pub fn single_id(&self, id_attr: &str) -> Option<ResourceId> {
        self.id.clone().or_else(|| {
            self.resource
                .iter()
                .chain(self.resources.iter())
                .find_map(|entity| entity.id(id_attr))
        })
    }

    /// Ids for a bulk operation: `ids` (plus `id` if set), else the payload ids.
    pub fn many_ids(&self, id_attr: &str) -> Vec<ResourceId> {
        let explicit: Vec<ResourceId> = self.id.iter().chain(self.ids.iter()).cloned().collect();
        if !explicit.is_empty() {
            return explicit;
        }
        self.resource
            .iter()
            .chain(self.resources.iter())
            .filter_map(|entity| entity.id(id_attr))
            .collect()
    }
}

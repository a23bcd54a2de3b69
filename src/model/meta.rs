use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::ResourceId;
use crate::status::RequestStatus;

/// Per-entity metadata map. `None` marks an entry nulled by a delete.
pub type MetaMap = BTreeMap<ResourceId, Option<Arc<ResourceMeta>>>;

/// Metadata about a single entity: request statuses keyed by kind
/// (`readStatus`, `updateStatus`, `deleteStatus`) plus any user fields
/// such as `isSelected`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceMeta(Map<String, Value>);

impl ResourceMeta {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Metadata holding exactly one status field.
    pub fn with_status(field: &str, status: RequestStatus) -> Self {
        Self::new().with(field, status)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Reads a status field. Absent or unrecognised values yield `None`.
    pub fn status(&self, field: &str) -> Option<RequestStatus> {
        self.0.get(field).and_then(RequestStatus::from_value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// `{...self, ...update}`.
    pub fn merged(&self, update: &ResourceMeta) -> ResourceMeta {
        let mut fields = self.0.clone();
        for (key, value) in &update.0 {
            fields.insert(key.clone(), value.clone());
        }
        ResourceMeta(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ResourceMeta {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Status of operations that are not scoped to a single entity.
///
/// The three status fields are always present. User fields supplied through
/// the initial state are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub read_status: RequestStatus,
    pub create_status: RequestStatus,
    pub create_many_status: RequestStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The three list-level status slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatusField {
    Read,
    Create,
    CreateMany,
}

impl ListMeta {
    pub fn status(&self, field: ListStatusField) -> RequestStatus {
        match field {
            ListStatusField::Read => self.read_status,
            ListStatusField::Create => self.create_status,
            ListStatusField::CreateMany => self.create_many_status,
        }
    }

    /// Copy of `self` with one status replaced.
    pub fn with_status(&self, field: ListStatusField, status: RequestStatus) -> ListMeta {
        let mut next = self.clone();
        match field {
            ListStatusField::Read => next.read_status = status,
            ListStatusField::Create => next.create_status = status,
            ListStatusField::CreateMany => next.create_many_status = status,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_meta_serializes_with_camel_case_and_extras() {
        let mut meta = ListMeta::default().with_status(ListStatusField::CreateMany, RequestStatus::Pending);
        meta.extra.insert("page".into(), json!(2));

        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "readStatus": "NULL",
                "createStatus": "NULL",
                "createManyStatus": "PENDING",
                "page": 2
            })
        );
    }

    #[test]
    fn status_ignores_non_status_values() {
        let meta = ResourceMeta::new()
            .with("deleteStatus", "sandwiches")
            .with("updateStatus", RequestStatus::Failed);
        assert_eq!(meta.status("deleteStatus"), None);
        assert_eq!(meta.status("updateStatus"), Some(RequestStatus::Failed));
    }
}

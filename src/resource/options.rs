use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::ResourceError;
use crate::action_types::SupportedActions;
use crate::model::{Entity, ListMeta, MetaMap, ResourceId, ResourceMeta, ResourceState};
use crate::reducer::ActionReducer;
use crate::status::RequestStatus;

/// Setup options for [`create_resource`](super::create_resource).
///
/// Everything except custom reducers can come from JSON:
///
/// ```
/// use resource_reducer::resource::ResourceOptions;
///
/// let options: ResourceOptions = serde_json::from_str(r#"{
///     "idAttribute": "uuid",
///     "pluralForm": "catPeople",
///     "supportedActions": { "del": false, "delMany": false }
/// }"#).unwrap();
/// assert_eq!(options.id_attribute.as_deref(), Some("uuid"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceOptions {
    pub initial_state: InitialState,
    /// Defaults to `id`.
    pub id_attribute: Option<String>,
    /// Defaults to the name with an `s` appended.
    pub plural_form: Option<String>,
    pub supported_actions: SupportedActions,
    #[serde(skip)]
    pub action_reducers: Vec<ActionReducer>,
}

impl ResourceOptions {
    pub fn with_initial_state(mut self, initial_state: InitialState) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_id_attribute(mut self, id_attribute: impl Into<String>) -> Self {
        self.id_attribute = Some(id_attribute.into());
        self
    }

    pub fn with_plural_form(mut self, plural_form: impl Into<String>) -> Self {
        self.plural_form = Some(plural_form.into());
        self
    }

    pub fn with_supported_actions(mut self, supported_actions: SupportedActions) -> Self {
        self.supported_actions = supported_actions;
        self
    }

    /// Registers a custom reducer. Order of registration is kept.
    pub fn with_action_reducer(mut self, action_reducer: ActionReducer) -> Self {
        self.action_reducers.push(action_reducer);
        self
    }
}

/// Partial override of the default initial state.
///
/// `resources` and `meta` replace the defaults outright; `listMeta` is merged
/// field by field so unspecified statuses stay `NULL`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialState {
    pub resources: Option<Vec<Entity>>,
    #[serde(deserialize_with = "deserialize_meta")]
    pub meta: Option<BTreeMap<ResourceId, ResourceMeta>>,
    #[serde(alias = "resourceListMeta")]
    pub list_meta: ListMetaOverride,
}

/// Field-wise override for [`ListMeta`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListMetaOverride {
    pub read_status: Option<RequestStatus>,
    pub create_status: Option<RequestStatus>,
    pub create_many_status: Option<RequestStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InitialState {
    pub fn with_resources(mut self, resources: Vec<Entity>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_meta(mut self, id: impl Into<ResourceId>, meta: ResourceMeta) -> Self {
        self.meta.get_or_insert_with(BTreeMap::new).insert(id.into(), meta);
        self
    }

    pub fn with_list_meta(mut self, list_meta: ListMetaOverride) -> Self {
        self.list_meta = list_meta;
        self
    }

    /// Merges the override onto the default state, checking that initial
    /// entities carry unique ids.
    pub(crate) fn build(self, id_attr: &str) -> Result<ResourceState, ResourceError> {
        let resources = self.resources.unwrap_or_default();
        let mut seen = HashSet::new();
        for entity in &resources {
            let id = entity
                .id(id_attr)
                .ok_or_else(|| ResourceError::MissingInitialId(id_attr.to_string()))?;
            if !seen.insert(id.clone()) {
                return Err(ResourceError::DuplicateInitialId(id));
            }
        }

        let meta: MetaMap = self
            .meta
            .unwrap_or_default()
            .into_iter()
            .map(|(id, meta)| (id, Some(Arc::new(meta))))
            .collect();

        let defaults = ListMeta::default();
        let overrides = self.list_meta;
        let list_meta = ListMeta {
            read_status: overrides.read_status.unwrap_or(defaults.read_status),
            create_status: overrides.create_status.unwrap_or(defaults.create_status),
            create_many_status: overrides.create_many_status.unwrap_or(defaults.create_many_status),
            extra: overrides.extra,
        };

        Ok(ResourceState::new(
            resources.into_iter().map(Arc::new).collect(),
            meta,
            list_meta,
        ))
    }
}

/// JSON object keys are always strings; numeric-looking keys become numeric
/// ids so they line up with numeric entity ids.
fn deserialize_meta<'de, D>(deserializer: D) -> Result<Option<BTreeMap<ResourceId, ResourceMeta>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, ResourceMeta>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|entries| {
        entries
            .into_iter()
            .map(|(key, meta)| (ResourceId::from_key(key), meta))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_meta_is_merged_field_by_field() {
        let initial: InitialState = serde_json::from_value(json!({
            "resourceListMeta": { "readStatus": "PENDING", "page": 1 }
        }))
        .unwrap();
        let state = initial.build("id").unwrap();

        assert_eq!(state.list_meta.read_status, RequestStatus::Pending);
        assert_eq!(state.list_meta.create_status, RequestStatus::Null);
        assert_eq!(state.list_meta.extra.get("page"), Some(&json!(1)));
    }

    #[test]
    fn numeric_meta_keys_become_integer_ids() {
        let initial: InitialState = serde_json::from_value(json!({
            "resources": [{"id": 1}],
            "meta": { "1": { "name": "what" }, "abc": {} }
        }))
        .unwrap();
        let state = initial.build("id").unwrap();

        assert!(state.meta_for(&ResourceId::from(1)).is_some());
        assert!(state.meta_for(&ResourceId::from("abc")).is_some());
    }

    #[test]
    fn initial_resources_need_unique_ids() {
        let duplicate = InitialState::default()
            .with_resources(vec![Entity::new().with("id", 1), Entity::new().with("id", 1)]);
        assert_eq!(
            duplicate.build("id").unwrap_err(),
            ResourceError::DuplicateInitialId(ResourceId::from(1))
        );

        let wide = InitialState::default()
            .with_resources(vec![Entity::new().with("id", u64::MAX), Entity::new().with("id", 0.5)]);
        assert_eq!(wide.build("id").unwrap().len(), 2);

        let missing = InitialState::default().with_resources(vec![Entity::new().with("name", "x")]);
        assert_eq!(
            missing.build("id").unwrap_err(),
            ResourceError::MissingInitialId("id".into())
        );
    }
}

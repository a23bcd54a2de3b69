use serde::Serialize;
use std::sync::Arc;

use super::{Entity, ListMeta, MetaMap, ResourceId, ResourceMeta};

/// Immutable snapshot of one resource collection.
///
/// Each top-level part sits behind an `Arc`, so a transition that leaves a
/// part untouched hands back the very same allocation. `==` compares deeply;
/// use [`ResourceState::ptr_eq`] or `Arc::ptr_eq` on a part for identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceState {
    /// Entities as delivered by the server, no two sharing an id.
    pub resources: Arc<Vec<Arc<Entity>>>,
    /// Metadata about specific entities, e.g. an in-flight delete for id 24.
    pub meta: Arc<MetaMap>,
    /// Metadata about the collection as a whole.
    pub list_meta: Arc<ListMeta>,
}

impl ResourceState {
    pub fn new(resources: Vec<Arc<Entity>>, meta: MetaMap, list_meta: ListMeta) -> Self {
        Self {
            resources: Arc::new(resources),
            meta: Arc::new(meta),
            list_meta: Arc::new(list_meta),
        }
    }

    /// True when all three parts are the same allocations.
    pub fn ptr_eq(&self, other: &ResourceState) -> bool {
        Arc::ptr_eq(&self.resources, &other.resources)
            && Arc::ptr_eq(&self.meta, &other.meta)
            && Arc::ptr_eq(&self.list_meta, &other.list_meta)
    }

    pub fn find(&self, id_attr: &str, id: &ResourceId) -> Option<&Arc<Entity>> {
        self.resources
            .iter()
            .find(|entity| entity.id(id_attr).as_ref() == Some(id))
    }

    /// Metadata for `id`; `None` when absent or nulled.
    pub fn meta_for(&self, id: &ResourceId) -> Option<&Arc<ResourceMeta>> {
        self.meta.get(id).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub(crate) fn with_resources(&self, resources: Vec<Arc<Entity>>) -> Self {
        Self {
            resources: Arc::new(resources),
            ..self.clone()
        }
    }

    pub(crate) fn with_meta(&self, meta: MetaMap) -> Self {
        Self {
            meta: Arc::new(meta),
            ..self.clone()
        }
    }

    pub(crate) fn with_list_meta(&self, list_meta: ListMeta) -> Self {
        Self {
            list_meta: Arc::new(list_meta),
            ..self.clone()
        }
    }
}

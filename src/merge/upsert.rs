//! Collection upsert engine.
//!
//! The output is always a new `Vec`. Entities that no incoming entity
//! references keep their `Arc`; matched entities are rebuilt, never edited.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::trace;

use crate::model::{Entity, ResourceId};

/// Upserts `new_resources` into `resources`.
///
/// A matched entity is replaced wholesale (`replace`) or shallow-merged with
/// the incoming fields winning. Unmatched incoming entities are appended in
/// their incoming order. An incoming entity without an id never matches.
pub fn upsert_many_resources(
    resources: &[Arc<Entity>],
    new_resources: &[Entity],
    id_attr: &str,
    replace: bool,
) -> Vec<Arc<Entity>> {
    let mut next: Vec<Arc<Entity>> = resources.to_vec();
    let mut positions: HashMap<ResourceId, usize> = resources
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| entity.id(id_attr).map(|id| (id, index)))
        .collect();

    for incoming in new_resources {
        let id = incoming.id(id_attr);
        match id.as_ref().and_then(|id| positions.get(id).copied()) {
            Some(index) => {
                let updated = if replace {
                    incoming.clone()
                } else {
                    next[index].merged(incoming)
                };
                next[index] = Arc::new(updated);
            }
            None => {
                if id.is_none() {
                    trace!(id_attr, "Appending entity without an id");
                }
                if let Some(id) = id {
                    positions.insert(id, next.len());
                }
                next.push(Arc::new(incoming.clone()));
            }
        }
    }

    next
}

/// Single-entity form of [`upsert_many_resources`].
pub fn upsert_resource(
    resources: &[Arc<Entity>],
    new_resource: &Entity,
    id_attr: &str,
    replace: bool,
) -> Vec<Arc<Entity>> {
    upsert_many_resources(resources, std::slice::from_ref(new_resource), id_attr, replace)
}

/// Drops every entity whose id is in `ids`, keeping the rest in order.
pub fn remove_resources(
    resources: &[Arc<Entity>],
    ids: &[ResourceId],
    id_attr: &str,
) -> Vec<Arc<Entity>> {
    let doomed: HashSet<&ResourceId> = ids.iter().collect();
    resources
        .iter()
        .filter(|entity| match entity.id(id_attr) {
            Some(id) => !doomed.contains(&id),
            None => true,
        })
        .cloned()
        .collect()
}

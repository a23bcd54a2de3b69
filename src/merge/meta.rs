//! Metadata merge engine.
//!
//! Every function builds a fresh top-level [`MetaMap`] and leaves the input
//! untouched. Entries that are not targeted keep their `Arc`, so readers can
//! detect "nothing changed for id X" with a pointer comparison.

use std::sync::Arc;

use crate::model::{MetaMap, ResourceId, ResourceMeta};

/// New meta map where entry `id` becomes `new_meta` (`replace`) or
/// `{...meta[id], ...new_meta}` (merge). A missing or nulled prior entry
/// counts as empty.
pub fn update_resource_meta(
    meta: &MetaMap,
    new_meta: &ResourceMeta,
    id: &ResourceId,
    replace: bool,
) -> MetaMap {
    update_many_resource_metas(meta, new_meta, std::slice::from_ref(id), replace)
}

/// Applies [`update_resource_meta`]'s rule to every id in `ids`.
///
/// Repeated ids are harmless: the rule is idempotent for a fixed `new_meta`.
pub fn update_many_resource_metas(
    meta: &MetaMap,
    new_meta: &ResourceMeta,
    ids: &[ResourceId],
    replace: bool,
) -> MetaMap {
    let mut next = meta.clone();
    for id in ids {
        let entry = if replace {
            new_meta.clone()
        } else {
            match meta.get(id).and_then(Option::as_ref) {
                Some(existing) => existing.merged(new_meta),
                None => new_meta.clone(),
            }
        };
        next.insert(id.clone(), Some(Arc::new(entry)));
    }
    next
}

/// Nulls the entries for `ids`; used once the entities themselves are gone.
pub fn clear_resource_metas(meta: &MetaMap, ids: &[ResourceId]) -> MetaMap {
    let mut next = meta.clone();
    for id in ids {
        next.insert(id.clone(), None);
    }
    next
}

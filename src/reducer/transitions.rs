//! Built-in lifecycle transitions.
//!
//! One status machine per (entity id, operation) for per-id operations and
//! one per collection for list-level operations. Only `succeed` touches
//! entity data; every other phase is a status write.

use tracing::trace;

use crate::action::Action;
use crate::action_types::{Operation, Phase, StatusTarget};
use crate::merge::{clear_resource_metas, remove_resources, update_many_resource_metas, upsert_many_resources};
use crate::model::{ResourceId, ResourceMeta, ResourceState};
use crate::status::RequestStatus;

pub(crate) fn apply(
    state: &ResourceState,
    action: &Action,
    operation: Operation,
    phase: Phase,
    id_attr: &str,
) -> ResourceState {
    match phase {
        Phase::Succeed => succeed(state, action, operation, id_attr),
        Phase::Attempt | Phase::Fail | Phase::Abort | Phase::Reset => {
            set_status(state, action, operation, phase.status(), id_attr)
        }
    }
}

fn target_ids(action: &Action, operation: Operation, id_attr: &str) -> Vec<ResourceId> {
    if operation.is_many() {
        action.many_ids(id_attr)
    } else {
        action.single_id(id_attr).into_iter().collect()
    }
}

fn set_status(
    state: &ResourceState,
    action: &Action,
    operation: Operation,
    status: RequestStatus,
    id_attr: &str,
) -> ResourceState {
    match operation.status_target() {
        StatusTarget::List(field) => state.with_list_meta(state.list_meta.with_status(field, status)),
        StatusTarget::PerId(field) => {
            let ids = target_ids(action, operation, id_attr);
            if ids.is_empty() {
                trace!(%operation, "No ids on action, status unchanged");
                return state.clone();
            }
            let update = ResourceMeta::with_status(field, status);
            state.with_meta(update_many_resource_metas(&state.meta, &update, &ids, false))
        }
    }
}

fn succeed(state: &ResourceState, action: &Action, operation: Operation, id_attr: &str) -> ResourceState {
    match operation {
        Operation::Delete | Operation::DeleteMany => {
            let ids = target_ids(action, operation, id_attr);
            if ids.is_empty() {
                trace!(%operation, "No ids on action, nothing deleted");
                return state.clone();
            }
            state
                .with_resources(remove_resources(&state.resources, &ids, id_attr))
                .with_meta(clear_resource_metas(&state.meta, &ids))
        }
        Operation::Create
        | Operation::CreateMany
        | Operation::Read
        | Operation::ReadMany
        | Operation::Update
        | Operation::UpdateMany => {
            let payload = action.payload();
            let merged = if payload.is_empty() {
                state.clone()
            } else {
                let replace = operation == Operation::ReadMany && action.replace.unwrap_or(false);
                state.with_resources(upsert_many_resources(&state.resources, &payload, id_attr, replace))
            };
            set_status(&merged, action, operation, RequestStatus::Succeeded, id_attr)
        }
    }
}

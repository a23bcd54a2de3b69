use resource_reducer::action::Action;
use resource_reducer::model::{Entity, ResourceId, ResourceMeta};
use resource_reducer::resource::{create_resource, InitialState, Resource, ResourceOptions};
use serde_json::json;
use std::sync::Arc;

fn resource_with(initial: InitialState) -> Resource {
    create_resource("resource", ResourceOptions::default().with_initial_state(initial))
        .expect("valid resource")
}

fn seeded() -> InitialState {
    InitialState::default().with_resources(vec![
        Entity::new().with("id", 1),
        Entity::new().with("id", 3),
        Entity::new().with("id", 4),
    ])
}

fn delete_many(suffix: &str) -> Action {
    Action::new(format!("DELETE_MANY_RESOURCES{suffix}"), "resource").with_ids([3, 4])
}

fn expected_with_meta(resources: serde_json::Value, meta: serde_json::Value) -> serde_json::Value {
    json!({
        "resources": resources,
        "meta": meta,
        "listMeta": {
            "readStatus": "NULL",
            "createStatus": "NULL",
            "createManyStatus": "NULL"
        }
    })
}

#[test]
fn test_delete_many_attempt_marks_ids_pending() {
    let resource = resource_with(seeded());
    let reduced = resource.reduce(None, &delete_many(""));

    assert_eq!(
        serde_json::to_value(&reduced).unwrap(),
        expected_with_meta(
            json!([{"id": 1}, {"id": 3}, {"id": 4}]),
            json!({"3": {"deleteStatus": "PENDING"}, "4": {"deleteStatus": "PENDING"}})
        )
    );
    assert!(Arc::ptr_eq(&reduced.resources, &resource.initial_state().resources));
}

#[test]
fn test_delete_many_fail_marks_ids_failed() {
    let resource = resource_with(seeded());
    let reduced = resource.reduce(None, &delete_many("_FAIL"));

    assert_eq!(
        serde_json::to_value(&reduced).unwrap(),
        expected_with_meta(
            json!([{"id": 1}, {"id": 3}, {"id": 4}]),
            json!({"3": {"deleteStatus": "FAILED"}, "4": {"deleteStatus": "FAILED"}})
        )
    );
}

#[test]
fn test_delete_many_reset_nulls_status() {
    let resource = resource_with(seeded());
    let reduced = resource.reduce(None, &delete_many("_RESET"));

    assert_eq!(
        serde_json::to_value(&reduced).unwrap(),
        expected_with_meta(
            json!([{"id": 1}, {"id": 3}, {"id": 4}]),
            json!({"3": {"deleteStatus": "NULL"}, "4": {"deleteStatus": "NULL"}})
        )
    );
}

#[test]
fn test_delete_many_abort_marks_ids_aborted() {
    let resource = resource_with(seeded());
    let reduced = resource.reduce(None, &delete_many("_ABORT"));

    assert_eq!(
        serde_json::to_value(&reduced.meta).unwrap(),
        json!({"3": {"deleteStatus": "ABORTED"}, "4": {"deleteStatus": "ABORTED"}})
    );
}

#[test]
fn test_delete_many_succeed_removes_entities_and_nulls_meta() {
    let initial = seeded()
        .with_meta(1, ResourceMeta::new().with("name", "what"))
        .with_meta(3, ResourceMeta::new().with("deleteStatus", "sandwiches"));
    let resource = resource_with(initial);
    let before = resource.initial_state().clone();

    let reduced = resource.reduce(None, &delete_many("_SUCCEED"));

    assert_eq!(
        serde_json::to_value(&reduced).unwrap(),
        expected_with_meta(
            json!([{"id": 1}]),
            json!({"1": {"name": "what"}, "3": null, "4": null})
        )
    );
    // unrelated meta and entities are shared, not copied
    assert!(Arc::ptr_eq(
        reduced.meta_for(&ResourceId::from(1)).unwrap(),
        before.meta_for(&ResourceId::from(1)).unwrap()
    ));
    assert!(Arc::ptr_eq(&reduced.resources[0], &before.resources[0]));
    assert!(Arc::ptr_eq(&reduced.list_meta, &before.list_meta));
}

#[test]
fn test_delete_many_for_another_resource_is_ignored() {
    let resource = resource_with(seeded());
    let action = Action::new("DELETE_MANY_RESOURCES_SUCCEED", "hellos").with_ids([3, 4]);
    let reduced = resource.reduce(None, &action);
    assert!(reduced.ptr_eq(resource.initial_state()));
}

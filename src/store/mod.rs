//! Single-writer runtime around the pure reducer.
//!
//! # Main Components
//!
//! - [`ResourceStore`] - task that owns the state and applies actions in order
//! - [`StoreClient`] - cloneable handle: dispatch, read, subscribe
//! - [`Dispatch`] - the seam between callers and a store
//! - [`RequestTracker`] - wraps a request future in lifecycle actions
//!
//! # Testing
//!
//! See [`mock`] for a dispatcher that needs no running task.

mod actor;
mod client;
mod dispatch;
mod error;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use dispatch::*;
pub use error::*;
pub use mock::MockDispatcher;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action_types::{Operation, Phase};
    use crate::model::{Entity, ResourceId};
    use crate::resource::{create_resource, InitialState, ResourceOptions};
    use crate::status::RequestStatus;

    fn books() -> crate::resource::Resource {
        let initial = InitialState::default().with_resources(vec![
            Entity::new().with("id", 1).with("title", "Dune"),
            Entity::new().with("id", 2).with("title", "Emma"),
        ]);
        create_resource("book", ResourceOptions::default().with_initial_state(initial)).unwrap()
    }

    #[tokio::test]
    async fn store_applies_actions_in_order() {
        let resource = books();
        let (store, client) = ResourceStore::new(resource.reducer().clone(), 8);
        let handle = tokio::spawn(store.run());

        let attempt = resource.action(Operation::Delete, Phase::Attempt).unwrap().with_id(1);
        let state = client.dispatch(attempt).await.unwrap();
        assert_eq!(
            state.meta_for(&ResourceId::from(1)).unwrap().status("deleteStatus"),
            Some(RequestStatus::Pending)
        );

        let succeed = resource.action(Operation::Delete, Phase::Succeed).unwrap().with_id(1);
        client.dispatch(succeed).await.unwrap();

        let state = client.state().await.unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state.meta.get(&ResourceId::from(1)), Some(&None));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn subscribers_see_changes_but_not_no_ops() {
        let resource = books();
        let (store, client) = ResourceStore::new(resource.reducer().clone(), 8);
        tokio::spawn(store.run());

        let mut watcher = client.subscribe();
        let _ = watcher.borrow_and_update();

        client
            .dispatch(crate::action::Action::new("UNRELATED", "book"))
            .await
            .unwrap();
        assert!(!watcher.has_changed().unwrap());

        client
            .dispatch(resource.action(Operation::ReadMany, Phase::Attempt).unwrap())
            .await
            .unwrap();
        assert!(watcher.has_changed().unwrap());
        assert_eq!(
            watcher.borrow_and_update().list_meta.read_status,
            RequestStatus::Pending
        );
    }

    #[tokio::test]
    async fn closed_store_reports_error() {
        let resource = books();
        let (store, client) = ResourceStore::new(resource.reducer().clone(), 8);
        drop(store);

        let err = client.state().await.unwrap_err();
        assert_eq!(err, StoreError::StoreClosed);
    }
}

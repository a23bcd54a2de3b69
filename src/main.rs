//! Demo: a `book` resource driven through a store.
//!
//! 1. Reads the collection through a [`RequestTracker`].
//! 2. Updates one book, then deletes two in bulk.
//! 3. Fails an update and resets it so a UI could retry.

use resource_reducer::action_types::Operation;
use resource_reducer::model::{Entity, ResourceId};
use resource_reducer::resource::{create_resource, ResourceOptions};
use resource_reducer::runtime::setup_tracing;
use resource_reducer::store::{RequestTracker, ResourceStore, StoreClient};
use tracing::{error, info, Instrument};

fn book(id: i64, title: &str, author: &str) -> Entity {
    Entity::new()
        .with("id", id)
        .with("title", title)
        .with("author", author)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let resource = create_resource("book", ResourceOptions::default()).map_err(|e| e.to_string())?;
    info!(action_types = resource.action_types().len(), "Starting book store");

    let (store, client) = ResourceStore::new(resource.reducer().clone(), 32);
    let handle = tokio::spawn(store.run());
    let tracker: RequestTracker<StoreClient> = RequestTracker::new(client.clone(), resource);

    let span = tracing::info_span!("read_books");
    let state = async {
        tracker
            .track(Operation::ReadMany, Vec::new(), async {
                Ok::<_, String>(vec![
                    book(1, "Dune", "Herbert"),
                    book(2, "Emma", "Austen"),
                    book(3, "Ulysses", "Joyce"),
                ])
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(books = state.len(), read_status = %state.list_meta.read_status, "Books loaded");

    let span = tracing::info_span!("update_book");
    let state = async {
        tracker
            .track(Operation::Update, vec![ResourceId::from(2)], async {
                Ok::<_, String>(vec![Entity::new().with("id", 2).with("year", 1815)])
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    if let Some(emma) = state.find("id", &ResourceId::from(2)) {
        info!(book = %serde_json::Value::from((**emma).clone()), "Book updated");
    }

    let state = tracker
        .track(
            Operation::DeleteMany,
            vec![ResourceId::from(1), ResourceId::from(3)],
            async { Ok::<_, String>(Vec::new()) },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(books = state.len(), "Books deleted");

    let failed = tracker
        .track(Operation::Update, vec![ResourceId::from(2)], async {
            Err::<Vec<Entity>, _>("503 Service Unavailable".to_string())
        })
        .await;
    if let Err(e) = failed {
        error!(error = %e, "Update failed");
        let state = tracker
            .reset(Operation::Update, &[ResourceId::from(2)])
            .await
            .map_err(|e| e.to_string())?;
        let status = state
            .meta_for(&ResourceId::from(2))
            .and_then(|meta| meta.status("updateStatus"));
        info!(?status, "Update reset");
    }

    drop(tracker);
    drop(client);
    handle.await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}

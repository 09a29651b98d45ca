use actor_framework::{ActorEntity, Filter, FrameworkError, ResourceActor};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Ticket {
    id: u32,
    table: u32,
    status: String,
    rush: bool,
}

#[derive(Debug)]
struct TicketCreate {
    table: u32,
}

#[derive(Debug)]
struct TicketUpdate {
    status: String,
}

#[derive(Debug)]
enum TicketAction {
    Rush,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("table must be positive")]
    NoTable,
    #[error("status must not be empty")]
    EmptyStatus,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = bool;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.table == 0 {
            return Err(TicketError::NoTable);
        }
        Ok(Self {
            id,
            table: params.table,
            status: "pending".to_string(),
            rush: false,
        })
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if update.status.is_empty() {
            return Err(TicketError::EmptyStatus);
        }
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            TicketAction::Rush => {
                let changed = !self.rush;
                self.rush = true;
                Ok(changed)
            }
        }
    }
}

fn completed() -> Filter<Ticket> {
    Filter::new(|t: &Ticket| t.status == "completed")
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(TicketCreate { table: 5 }).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action, twice
    assert!(client.perform_action(id, TicketAction::Rush).await.unwrap());
    assert!(!client.perform_action(id, TicketAction::Rush).await.unwrap());

    // 3. Update
    let updated: Ticket = client
        .update(
            id,
            TicketUpdate {
                status: "completed".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "completed");
    assert!(updated.rush);

    // 4. Soft delete hides the record everywhere
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert_eq!(client.count().await.unwrap(), 0);
    assert!(client.list(Filter::all()).await.unwrap().is_empty());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_id() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(TicketCreate { table: 0 }).await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let id = client.create(TicketCreate { table: 2 }).await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(client.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_failed_update_leaves_entity_untouched() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(TicketCreate { table: 3 }).await.unwrap();
    let result = client
        .update(
            id,
            TicketUpdate {
                status: String::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));

    let ticket = client.get(id).await.unwrap().unwrap();
    assert_eq!(ticket.status, "pending");

    let missing = client
        .update(
            99,
            TicketUpdate {
                status: "completed".into(),
            },
        )
        .await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_list_keeps_creation_order_and_filters() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for table in [4, 8, 15, 16] {
        client.create(TicketCreate { table }).await.unwrap();
    }
    client
        .update(
            2,
            TicketUpdate {
                status: "completed".into(),
            },
        )
        .await
        .unwrap();

    let tables: Vec<u32> = client
        .list(Filter::all())
        .await
        .unwrap()
        .iter()
        .map(|t| t.table)
        .collect();
    assert_eq!(tables, vec![4, 8, 15, 16]);

    let done = client.list(completed()).await.unwrap();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].table, 8);
}

#[tokio::test]
async fn test_purge_removes_soft_deleted_records_too() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for table in 1..=3 {
        let id = client.create(TicketCreate { table }).await.unwrap();
        client
            .update(
                id,
                TicketUpdate {
                    status: "completed".into(),
                },
            )
            .await
            .unwrap();
    }
    client.delete(3).await.unwrap();

    let removed = client.purge(completed()).await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(client.purge(completed()).await.unwrap(), 0);

    // Ids are never reused
    let next = client.create(TicketCreate { table: 7 }).await.unwrap();
    assert_eq!(next, 4);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");

    {
        let (actor, client) = ResourceActor::<Ticket>::with_snapshot(10, &path).unwrap();
        let handle = tokio::spawn(actor.run(()));

        client.create(TicketCreate { table: 1 }).await.unwrap();
        client.create(TicketCreate { table: 2 }).await.unwrap();
        client.delete(1).await.unwrap();

        drop(client);
        handle.await.unwrap();
    }
    assert!(path.exists());

    let (actor, client) = ResourceActor::<Ticket>::with_snapshot(10, &path).unwrap();
    tokio::spawn(actor.run(()));

    assert_eq!(client.count().await.unwrap(), 1);
    assert!(client.get(1).await.unwrap().is_none());
    assert_eq!(client.get(2).await.unwrap().unwrap().table, 2);

    let id = client.create(TicketCreate { table: 3 }).await.unwrap();
    assert_eq!(id, 3);
}

#[tokio::test]
async fn test_corrupt_snapshot_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    std::fs::write(&path, b"not json").unwrap();

    let result = ResourceActor::<Ticket>::with_snapshot(10, &path);
    assert!(matches!(result, Err(FrameworkError::Storage(_))));
}

#[tokio::test]
async fn test_stale_id_counter_never_overwrites_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tickets.json");
    let stale = serde_json::json!({
        "next_id": 1,
        "records": [
            { "id": 1, "entity": { "id": 1, "table": 4, "status": "pending", "rush": false }, "deleted_at": null },
            { "id": 2, "entity": { "id": 2, "table": 6, "status": "pending", "rush": false }, "deleted_at": null }
        ]
    });
    std::fs::write(&path, serde_json::to_vec(&stale).unwrap()).unwrap();

    let (actor, client) = ResourceActor::<Ticket>::with_snapshot(10, &path).unwrap();
    tokio::spawn(actor.run(()));

    let id = client.create(TicketCreate { table: 9 }).await.unwrap();
    assert_eq!(id, 3);
    assert_eq!(client.get(1).await.unwrap().unwrap().table, 4);
    assert_eq!(client.get(2).await.unwrap().unwrap().table, 6);
    assert_eq!(client.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_snapshot_written_before_create_is_acknowledged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tickets.json");

    let (actor, client) = ResourceActor::<Ticket>::with_snapshot(10, &path).unwrap();
    tokio::spawn(actor.run(()));

    client.create(TicketCreate { table: 2 }).await.unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw["next_id"], 2);
    assert_eq!(raw["records"][0]["entity"]["table"], 2);
    assert!(!path.with_extension("json.tmp").exists());
}

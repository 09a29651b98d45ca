use actor_framework::ActorClient;
use restaurant_orders::lifecycle::RestaurantSystem;
use restaurant_orders::menu_actor::starter_menu;
use restaurant_orders::model::{
    MenuItemCreate, MenuItemId, MenuItemUpdate, OrderCreate, OrderId, OrderLine, OrderStatus,
};
use restaurant_orders::order_actor::OrderError;
use rust_decimal::Decimal;
use std::collections::HashSet;

fn order(table: u32, name: &str, lines: Vec<OrderLine>) -> OrderCreate {
    OrderCreate {
        table_number: table,
        customer_name: name.to_string(),
        items: lines,
    }
}

async fn seeded_system() -> RestaurantSystem {
    let system = RestaurantSystem::new();
    system.seed_menu().await.expect("Failed to seed menu");
    system
}

#[tokio::test]
async fn test_seed_fills_empty_menu_once() {
    let system = RestaurantSystem::new();

    assert_eq!(system.seed_menu().await.unwrap(), 3);
    assert_eq!(system.seed_menu().await.unwrap(), 0);

    let menu = system.menu_client.list_menu().await.unwrap();
    let names: Vec<&str> = menu.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Carne Seca com Catupiry",
            "Queijo Brie com Damasco",
            "Portuguesa Light"
        ]
    );
    assert_eq!(menu[0].price, Decimal::new(1299, 2));
    assert!(menu.iter().all(|m| m.category == "Pizza"));

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_seed_skipped_when_menu_differs() {
    let system = RestaurantSystem::new();
    system
        .menu_client
        .create_menu_item(MenuItemCreate::new("Calabresa", "", Decimal::new(1100, 2)))
        .await
        .unwrap();

    assert_eq!(system.seed_menu().await.unwrap(), 0);
    assert_eq!(system.menu_client.list_menu().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_full_order_lifecycle() {
    let system = seeded_system().await;
    let menu = system.menu_client.list_menu().await.unwrap();
    let brie = &menu[1];

    // Place
    let placed = system
        .order_client
        .create_order(order(5, "Alice", vec![OrderLine::new(brie.id.0, 2)]))
        .await
        .expect("Failed to create order");
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.table_number, 5);
    assert_eq!(placed.items.len(), 1);
    assert_eq!(placed.items[0].name, brie.name);
    assert_eq!(placed.items[0].price, brie.price);
    assert_eq!(placed.items[0].quantity, 2);

    let kitchen = system.order_client.list_active().await.unwrap();
    assert_eq!(kitchen.len(), 1);
    assert!(system.order_client.list_history().await.unwrap().is_empty());

    // Complete, twice
    for _ in 0..2 {
        let updated = system
            .order_client
            .update_status(placed.id, OrderStatus::Completed)
            .await
            .unwrap()
            .expect("Order should exist");
        assert!(updated.status.is_completed());
    }
    assert!(system.order_client.list_active().await.unwrap().is_empty());
    let history = system.order_client.list_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].items.len(), 1);

    // Purge
    assert_eq!(system.order_client.purge_history().await.unwrap(), 1);
    assert!(system.order_client.list_history().await.unwrap().is_empty());
    assert!(system.order_client.get(placed.id).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_unknown_menu_item_yields_empty_order() {
    let system = seeded_system().await;

    let placed = system
        .order_client
        .create_order(order(3, "Bia", vec![OrderLine::new(9999, 1)]))
        .await
        .unwrap();
    assert!(placed.items.is_empty());
    assert_eq!(system.order_client.list_active().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_order_persists_nothing() {
    let system = seeded_system().await;

    let result = system.order_client.create_order(order(0, "", vec![])).await;
    assert!(matches!(result, Err(OrderError::Validation(_))));
    assert_eq!(system.order_client.count().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_any_status_but_completed_is_active() {
    let system = seeded_system().await;
    let line = || vec![OrderLine::new(1, 1)];

    let a = system.order_client.create_order(order(1, "A", line())).await.unwrap();
    let b = system.order_client.create_order(order(2, "B", line())).await.unwrap();
    let c = system.order_client.create_order(order(3, "C", line())).await.unwrap();

    system
        .order_client
        .update_status(a.id, OrderStatus::from("on-hold"))
        .await
        .unwrap();
    system
        .order_client
        .update_status(b.id, OrderStatus::from(""))
        .await
        .unwrap();
    system
        .order_client
        .update_status(c.id, OrderStatus::Completed)
        .await
        .unwrap();

    let active: Vec<OrderId> = system
        .order_client
        .list_active()
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(active, vec![a.id, b.id]);

    let history = system.order_client.list_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, c.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_order_reports_nothing_changed() {
    let system = seeded_system().await;

    let result = system
        .order_client
        .update_status(OrderId(404), OrderStatus::Completed)
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(system.order_client.count().await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_purge_leaves_active_orders() {
    let system = seeded_system().await;

    let keep = system
        .order_client
        .create_order(order(1, "Keep", vec![OrderLine::new(1, 1)]))
        .await
        .unwrap();
    let done = system
        .order_client
        .create_order(order(2, "Done", vec![OrderLine::new(2, 1)]))
        .await
        .unwrap();
    system
        .order_client
        .update_status(done.id, OrderStatus::Completed)
        .await
        .unwrap();

    assert_eq!(system.order_client.purge_history().await.unwrap(), 1);
    let remaining = system.order_client.list_active().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert_eq!(remaining[0].items.len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_soft_deleted_completed_order_is_purged() {
    let system = seeded_system().await;

    let placed = system
        .order_client
        .create_order(order(6, "Caio", vec![OrderLine::new(3, 1)]))
        .await
        .unwrap();
    system
        .order_client
        .update_status(placed.id, OrderStatus::Completed)
        .await
        .unwrap();
    system.order_client.delete(placed.id).await.unwrap();

    assert!(system.order_client.list_history().await.unwrap().is_empty());
    assert_eq!(system.order_client.purge_history().await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_items_keep_price_at_order_time() {
    let system = seeded_system().await;

    let placed = system
        .order_client
        .create_order(order(4, "Davi", vec![OrderLine::new(3, 1)]))
        .await
        .unwrap();
    let original = placed.items[0].price;

    system
        .menu_client
        .update_menu_item(
            MenuItemId(3),
            MenuItemUpdate {
                price: Some(Decimal::new(2000, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = system
        .order_client
        .get(placed.id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(stored.items[0].price, original);
    assert_eq!(original, Decimal::new(1499, 2));

    system.shutdown().await.unwrap();
}

/// Test concurrent order creation to verify actor isolation.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = seeded_system().await;

    let mut tasks = Vec::new();
    for table in 1..=20u32 {
        let client = system.order_client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .create_order(order(table, "Mesa", vec![OrderLine::new(1, 1), OrderLine::new(2, 2)]))
                .await
        }));
    }

    for task in tasks {
        let placed = task.await.unwrap().expect("Concurrent order failed");
        assert_eq!(placed.items.len(), 2);
    }

    let active = system.order_client.list_active().await.unwrap();
    assert_eq!(active.len(), 20);
    let ids: HashSet<u32> = active.iter().map(|o| o.id.0).collect();
    assert_eq!(ids.len(), 20);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_state_survives_restart_with_data_dir() {
    let dir = tempfile::tempdir().unwrap();

    let first_id = {
        let system = RestaurantSystem::with_data_dir(dir.path()).unwrap();
        system.seed_menu().await.unwrap();
        let placed = system
            .order_client
            .create_order(order(8, "Eva", vec![OrderLine::new(1, 3)]))
            .await
            .unwrap();
        system.shutdown().await.unwrap();
        placed.id
    };

    let system = RestaurantSystem::with_data_dir(dir.path()).unwrap();
    assert_eq!(system.seed_menu().await.unwrap(), 0);
    assert_eq!(
        system.menu_client.list_menu().await.unwrap().len(),
        starter_menu().len()
    );

    let reloaded = system
        .order_client
        .get(first_id)
        .await
        .unwrap()
        .expect("Order should survive restart");
    assert_eq!(reloaded.customer_name, "Eva");
    assert_eq!(reloaded.items[0].quantity, 3);

    let next = system
        .order_client
        .create_order(order(9, "Fabio", vec![OrderLine::new(2, 1)]))
        .await
        .unwrap();
    assert!(next.id.0 > first_id.0);

    system.shutdown().await.unwrap();
}

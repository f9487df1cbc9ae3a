use order_desk::error::StoreError;
use order_desk::lifecycle::OrderSystem;
use order_desk::model::*;
use order_desk::service::{ResourceService, Services};
use rust_decimal::Decimal;

fn customer(name: &str) -> CustomerCreate {
    CustomerCreate {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "070-000 00 00".into(),
    }
}

fn product(name: &str, price: Decimal) -> ProductCreate {
    ProductCreate {
        name: name.into(),
        price,
        stock: 10,
    }
}

fn order_for(customer_id: CustomerId) -> OrderCreate {
    OrderCreate {
        customer_id,
        order_date: None,
        status: DEFAULT_STATUS.into(),
    }
}

async fn start() -> (OrderSystem, Services) {
    let system = OrderSystem::new();
    let services = system.services();
    (system, services)
}

#[tokio::test]
async fn test_create_then_get_returns_equal_value() {
    let (system, services) = start().await;

    let created = services.customers.create(customer("Alice")).await.unwrap();
    assert_eq!(created.id, CustomerId(1));
    let fetched = services.customers.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let order = services.orders.create(order_for(created.id)).await.unwrap();
    let fetched = services.orders.get_by_id(order.order.id).await.unwrap();
    assert_eq!(fetched, order);
    assert_eq!(fetched.order.status, "Pending");

    drop(services);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_absent_id_is_not_found_and_mutates_nothing() {
    let (_system, services) = start().await;
    services
        .products
        .create(product("Chair", Decimal::new(4900, 2)))
        .await
        .unwrap();

    let missing = ProductId(99);
    assert!(matches!(
        services.products.get_by_id(missing).await,
        Err(StoreError::NotFound { .. })
    ));
    let update = ProductUpdate {
        name: "Table".into(),
        price: Decimal::ONE,
        stock: 1,
    };
    assert!(matches!(
        services.products.update(missing, update).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        services.products.delete(missing).await,
        Err(StoreError::NotFound { .. })
    ));

    let rows = services.products.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Chair");
}

#[tokio::test]
async fn test_update_only_touches_mutable_subset() {
    let (_system, services) = start().await;
    let alice = services.customers.create(customer("Alice")).await.unwrap();
    let bob = services.customers.create(customer("Bob")).await.unwrap();
    let order = services.orders.create(order_for(alice.id)).await.unwrap();

    // customerID in the payload is not part of OrderUpdate at all
    let update: OrderUpdate = serde_json::from_value(serde_json::json!({
        "orderID": 77,
        "customerID": bob.id,
        "status": "Shipped"
    }))
    .unwrap();
    let updated = services.orders.update(order.order.id, update).await.unwrap();

    assert_eq!(updated.order.id, order.order.id);
    assert_eq!(updated.order.customer_id, alice.id);
    assert_eq!(updated.order.order_date, order.order.order_date);
    assert_eq!(updated.order.status, "Shipped");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_system, services) = start().await;
    let p = services
        .products
        .create(product("Lamp", Decimal::new(1999, 2)))
        .await
        .unwrap();

    services.products.delete(p.id).await.unwrap();
    assert!(matches!(
        services.products.get_by_id(p.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_creates_minus_deletes_leaves_live_rows() {
    let (_system, services) = start().await;
    for i in 0..6 {
        services
            .customers
            .create(customer(&format!("C{i}")))
            .await
            .unwrap();
    }
    for id in [1, 4] {
        services.customers.delete(CustomerId(id)).await.unwrap();
    }

    let ids: Vec<i32> = services
        .customers
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id.0)
        .collect();
    assert_eq!(ids, vec![2, 3, 5, 6]);
}

#[tokio::test]
async fn test_views_nest_relations_in_one_direction() {
    let (_system, services) = start().await;
    let alice = services.customers.create(customer("Alice")).await.unwrap();
    let lamp = services
        .products
        .create(product("Lamp", Decimal::new(1999, 2)))
        .await
        .unwrap();
    let order = services.orders.create(order_for(alice.id)).await.unwrap();
    assert!(order.order_items.is_empty());

    let line = services
        .order_items
        .create(OrderItemCreate {
            order_id: order.order.id,
            product_id: lamp.id,
            quantity: 3,
        })
        .await
        .unwrap();
    assert_eq!(line.product.as_ref(), Some(&lamp));
    assert_eq!(line.order.as_ref(), Some(&order.order));

    let order = services.orders.get_by_id(order.order.id).await.unwrap();
    assert_eq!(order.customer, Some(alice));
    assert_eq!(order.order_items, vec![line.item.clone()]);

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["orderItems"][0]["quantity"], 3);
    assert!(json["orderItems"][0].get("order").is_none());
    assert!(json["customer"].get("orders").is_none());
}

#[tokio::test]
async fn test_dangling_references_are_omitted_from_views() {
    let (_system, services) = start().await;

    // Neither customer 5 nor product 8 exists; creation does not check.
    let order = services
        .orders
        .create(order_for(CustomerId(5)))
        .await
        .unwrap();
    let line = services
        .order_items
        .create(OrderItemCreate {
            order_id: order.order.id,
            product_id: ProductId(8),
            quantity: 1,
        })
        .await
        .unwrap();

    assert!(order.customer.is_none());
    assert!(line.product.is_none());
    let json = serde_json::to_value(&line).unwrap();
    assert!(json.get("product").is_none());
    assert_eq!(json["order"]["orderID"], order.order.id.0);
}

#[tokio::test]
async fn test_deleting_customer_cascades_to_orders_and_lines() {
    let (_system, services) = start().await;
    let alice = services.customers.create(customer("Alice")).await.unwrap();
    let bob = services.customers.create(customer("Bob")).await.unwrap();
    let lamp = services
        .products
        .create(product("Lamp", Decimal::new(1999, 2)))
        .await
        .unwrap();

    let alices = services.orders.create(order_for(alice.id)).await.unwrap();
    let bobs = services.orders.create(order_for(bob.id)).await.unwrap();
    for order_id in [alices.order.id, bobs.order.id] {
        services
            .order_items
            .create(OrderItemCreate {
                order_id,
                product_id: lamp.id,
                quantity: 1,
            })
            .await
            .unwrap();
    }

    services.customers.delete(alice.id).await.unwrap();

    let orders = services.orders.list_all().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.customer_id, bob.id);
    let lines = services.order_items.list_all().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item.order_id, bobs.order.id);

    services.products.delete(lamp.id).await.unwrap();
    assert!(services.order_items.list_all().await.unwrap().is_empty());
}

use order_desk::http::router;
use order_desk::lifecycle::OrderSystem;
use order_desk::model::{CustomerId, ProductId};
use order_desk::workflow::{compose_order, HttpOrderApi, OrderDraft};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves a fresh system on an ephemeral port and returns its base URL.
async fn spawn_app() -> String {
    let system = OrderSystem::new();
    let app = router(system.services());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // keep the system's clients alive for the lifetime of the server
        let _system = system;
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

async fn post(client: &reqwest::Client, url: String, body: Value) -> reqwest::Response {
    client.post(url).json(&body).send().await.unwrap()
}

#[tokio::test]
async fn test_customer_crud_status_codes() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = post(
        &client,
        format!("{base}/api/customers"),
        json!({ "customerID": 42, "name": "Alice", "email": "a@x.se", "phone": "1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers()["location"].to_str().unwrap(),
        "/api/customers/1"
    );
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["customerID"], 1);
    assert!(created.get("orders").is_none());

    let response = client
        .get(format!("{base}/api/customers/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), created);

    let response = client
        .put(format!("{base}/api/customers/1"))
        .json(&json!({ "name": "Alicia", "email": "a@x.se", "phone": "2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap()["name"], "Alicia");

    let response = client
        .get(format!("{base}/api/customers"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>().await.unwrap().len(), 1);

    let response = client
        .delete(format!("{base}/api/customers/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{base}/api/customers/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_ids_are_404_for_every_verb() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let get = client
        .get(format!("{base}/api/products/9"))
        .send()
        .await
        .unwrap();
    let put = client
        .put(format!("{base}/api/products/9"))
        .json(&json!({ "name": "Lamp", "price": 1.5, "stock": 1 }))
        .send()
        .await
        .unwrap();
    let delete = client
        .delete(format!("{base}/api/products/9"))
        .send()
        .await
        .unwrap();

    for response in [get, put, delete] {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_malformed_input_is_400() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let not_json = client
        .post(format!("{base}/api/products"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(not_json.status(), StatusCode::BAD_REQUEST);

    let missing_name = post(&client, format!("{base}/api/products"), json!({ "price": 2 })).await;
    assert_eq!(missing_name.status(), StatusCode::BAD_REQUEST);

    let bad_id = client
        .get(format!("{base}/api/orders/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);

    let listing = client
        .get(format!("{base}/api/products"))
        .send()
        .await
        .unwrap();
    assert_eq!(listing.json::<Vec<Value>>().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_order_views_over_http() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    post(
        &client,
        format!("{base}/api/customers"),
        json!({ "name": "Alice", "email": "a@x.se", "phone": "1" }),
    )
    .await;
    post(
        &client,
        format!("{base}/api/products"),
        json!({ "name": "Lamp", "price": 19.99, "stock": 3 }),
    )
    .await;
    let order: Value = post(
        &client,
        format!("{base}/api/orders"),
        json!({ "customerID": 1 }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(order["status"], "Pending");
    assert_eq!(order["customer"]["name"], "Alice");
    assert_eq!(order["orderItems"], json!([]));

    let item: Value = post(
        &client,
        format!("{base}/api/orderitems"),
        json!({ "orderID": 1, "productID": 1, "quantity": 2 }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(item["product"]["price"], json!(19.99));
    assert_eq!(item["order"]["orderID"], 1);
    assert!(item["order"].get("orderItems").is_none());

    let order: Value = client
        .get(format!("{base}/api/orders/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(order["orderItems"][0]["orderItemID"], 1);
    assert!(order["orderItems"][0].get("product").is_none());
}

#[tokio::test]
async fn test_health_and_docs() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "healthy");
    assert!(health["time"].is_string());

    let html = client
        .get(format!("{base}/docs"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("/api/orderitems/:id"));

    let routes: Vec<Value> = client
        .get(format!("{base}/docs"))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    // five per resource plus /health and /docs
    assert_eq!(routes.len(), 22);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/customers"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/orders/1"))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "DELETE")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(preflight.status().is_success());
    assert!(preflight.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_compose_order_against_running_server() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    for name in ["Lamp", "Chair"] {
        post(
            &client,
            format!("{base}/api/products"),
            json!({ "name": name, "price": 10, "stock": 5 }),
        )
        .await;
    }

    let api = HttpOrderApi::new(format!("{base}/api/"));
    let draft = OrderDraft::new(CustomerId(1))
        .line(ProductId(1), 2)
        .line(ProductId(2), 0)
        .line(ProductId(2), 1);
    let order = compose_order(&api, draft).await.unwrap();
    assert_eq!(order.status, "Pending");

    let lines: Vec<Value> = client
        .get(format!("{base}/api/orderitems"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["quantity"], 2);
    assert_eq!(lines[1]["productID"], 2);
    assert_eq!(lines[1]["orderID"], order.id.0);
}

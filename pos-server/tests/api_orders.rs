//! Order API integration tests: lifecycle, QR queue, drafts

mod common;

use axum::Router;
use common::{delete, get, patch, post, test_app};
use http::StatusCode;
use serde_json::{Value, json};

/// Drinks category + Cola product + table 1; returns (product_id, table_id)
async fn setup_menu(app: &Router) -> (String, String) {
    let (_, category) = post(
        app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        app,
        "/api/products",
        json!({
            "name": "Cola",
            "price": "2.00",
            "categoryId": category["id"],
        }),
    )
    .await;
    let (_, table) = post(app, "/api/tables", json!({"tableNumber": "1"})).await;
    (
        product["id"].as_str().unwrap().to_string(),
        table["id"].as_str().unwrap().to_string(),
    )
}

async fn create_order(app: &Router, body: Value) -> Value {
    let (status, order) = post(app, "/api/orders", body).await;
    assert_eq!(status, StatusCode::CREATED);
    order
}

#[tokio::test]
async fn create_order_occupies_table_and_recomputes_totals() {
    let app = test_app();
    let (product_id, table_id) = setup_menu(&app).await;

    let order = create_order(
        &app,
        json!({
            "tableId": table_id,
            "items": [{"productId": product_id, "quantity": 3, "price": "2.00"}],
        }),
    )
    .await;

    // First order of an empty store
    assert_eq!(order["orderNumber"], "20");
    assert_eq!(order["status"], "draft");
    assert_eq!(order["subtotal"], "6.00");
    assert_eq!(order["total"], "6.00");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["total"], "6.00");
    assert_eq!(order["items"][0]["product"]["name"], "Cola");

    let (_, table) = get(&app, &format!("/api/tables/{table_id}")).await;
    assert_eq!(table["status"], "occupied");
}

#[tokio::test]
async fn percentage_discount_applies_at_creation() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let order = create_order(
        &app,
        json!({
            "discount": "10",
            "discountType": "percentage",
            "items": [{"productId": product_id, "quantity": 5, "price": "2.00"}],
        }),
    )
    .await;
    assert_eq!(order["subtotal"], "10.00");
    assert_eq!(order["total"], "9.00");
}

#[tokio::test]
async fn status_machine_governs_transitions() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let order = create_order(
        &app,
        json!({"items": [{"productId": product_id, "quantity": 1, "price": "2.00"}]}),
    )
    .await;
    let id = order["id"].as_str().unwrap();

    // draft -> pending is not a legal jump
    let (status, body) = patch(
        &app,
        &format!("/api/orders/{id}/status"),
        json!({"status": "pending"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("draft"));

    // draft -> completed stamps completedAt
    let (status, completed) = patch(
        &app,
        &format!("/api/orders/{id}/status"),
        json!({"status": "completed"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "completed");
    assert!(completed["completedAt"].is_string());

    // completed is terminal
    let (status, _) = patch(
        &app,
        &format!("/api/orders/{id}/status"),
        json!({"status": "cancelled"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn qr_queue_accept_and_reject() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let make_qr = || {
        json!({
            "orderSource": "qr",
            "status": "qr-pending",
            "customerName": "James Wilson",
            "items": [{"productId": product_id, "quantity": 2, "price": "2.00"}],
        })
    };
    let first = create_order(&app, make_qr()).await;
    let second = create_order(&app, make_qr()).await;

    let (status, queue) = get(&app, "/api/orders/qr").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 2);
    // QR listing resolves items for the acceptance dialog
    assert_eq!(queue[0]["items"][0]["product"]["name"], "Cola");

    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    let (status, accepted) =
        patch(&app, &format!("/api/orders/{first_id}/accept"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(accepted["status"], "pending");

    let (status, rejected) =
        patch(&app, &format!("/api/orders/{second_id}/reject"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "cancelled");

    let (_, queue) = get(&app, "/api/orders/qr").await;
    assert!(queue.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn drafts_are_listed_with_items_until_resolved() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let draft = create_order(
        &app,
        json!({"items": [{"productId": product_id, "quantity": 1, "price": "2.00"}]}),
    )
    .await;
    create_order(
        &app,
        json!({
            "status": "completed",
            "items": [{"productId": product_id, "quantity": 1, "price": "2.00"}],
        }),
    )
    .await;

    let (status, drafts) = get(&app, "/api/orders/drafts").await;
    assert_eq!(status, StatusCode::OK);
    let drafts = drafts.as_array().unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0]["id"], draft["id"]);
    assert_eq!(drafts[0]["items"].as_array().unwrap().len(), 1);

    // Completed orders show up as sales instead
    let (_, sales) = get(&app, "/api/sales").await;
    assert_eq!(sales.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_cascades_items_but_not_table_status() {
    let app = test_app();
    let (product_id, table_id) = setup_menu(&app).await;

    let order = create_order(
        &app,
        json!({
            "tableId": table_id,
            "items": [{"productId": product_id, "quantity": 2, "price": "2.00"}],
        }),
    )
    .await;
    let id = order["id"].as_str().unwrap();

    let (status, body) = delete(&app, &format!("/api/orders/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = get(&app, &format!("/api/orders/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/orders/{id}/items")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The table stays occupied; nothing reverts it on deletion
    let (_, table) = get(&app, &format!("/api/tables/{table_id}")).await;
    assert_eq!(table["status"], "occupied");
}

#[tokio::test]
async fn zero_quantity_items_are_rejected() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let (status, body) = post(
        &app,
        "/api/orders",
        json!({"items": [{"productId": product_id, "quantity": 0, "price": "2.00"}]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("quantity"));
}

#[tokio::test]
async fn update_changes_discount_and_payment_fields() {
    let app = test_app();
    let (product_id, _) = setup_menu(&app).await;

    let order = create_order(
        &app,
        json!({"items": [{"productId": product_id, "quantity": 5, "price": "2.00"}]}),
    )
    .await;
    let id = order["id"].as_str().unwrap();

    let (status, updated) = patch(
        &app,
        &format!("/api/orders/{id}"),
        json!({"discount": "2.50", "paymentMethod": "card"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["total"], "7.50");
    assert_eq!(updated["paymentMethod"], "card");
}

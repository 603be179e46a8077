//! Catalog API integration tests: categories, products, tables

mod common;

use common::{delete, get, patch, post, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn product_round_trip_applies_defaults() {
    let app = test_app();

    let (status, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_str().unwrap().to_string();

    let (status, created) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["unit"], "piece");
    assert_eq!(created["quantity"], "0");
    assert_eq!(created["price"], "2.00");

    // GET by the returned id yields identical field values
    let id = created["id"].as_str().unwrap();
    let (status, fetched) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_category_slug_conflicts() {
    let app = test_app();

    let (status, _) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        "/api/categories",
        json!({"name": "Other Drinks", "slug": "drinks"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("drinks"));
}

#[tokio::test]
async fn products_filter_by_category() {
    let app = test_app();

    let (_, drinks) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, pizza) = post(
        &app,
        "/api/categories",
        json!({"name": "Pizza", "slug": "pizza"}),
    )
    .await;
    let drinks_id = drinks["id"].as_str().unwrap();
    let pizza_id = pizza["id"].as_str().unwrap();

    post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": drinks_id}),
    )
    .await;
    post(
        &app,
        "/api/products",
        json!({"name": "Margherita", "price": "14.00", "categoryId": pizza_id}),
    )
    .await;

    let (status, all) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, filtered) = get(&app, &format!("/api/products?categoryId={drinks_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["name"], "Cola");
}

#[tokio::test]
async fn missing_entities_return_404() {
    let app = test_app();

    let (status, _) = get(&app, "/api/products/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = patch(&app, "/api/categories/nope", json!({"name": "X"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/api/tables/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_names_are_rejected() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/categories",
        json!({"name": "  ", "slug": "blank"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn table_numbers_are_unique_and_status_patchable() {
    let app = test_app();

    let (status, table) = post(
        &app,
        "/api/tables",
        json!({"tableNumber": "1", "capacity": "4"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(table["status"], "available");
    let id = table["id"].as_str().unwrap();

    let (status, _) = post(&app, "/api/tables", json!({"tableNumber": "1"})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = patch(
        &app,
        &format!("/api/tables/{id}/status"),
        json!({"status": "reserved"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "reserved");
}

#[tokio::test]
async fn delete_returns_success_body() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Soup", "slug": "soup"}),
    )
    .await;
    let id = category["id"].as_str().unwrap();

    let (status, body) = delete(&app, &format!("/api/categories/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = get(&app, &format!("/api/categories/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

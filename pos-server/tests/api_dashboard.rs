//! Dashboard API integration tests

mod common;

use common::{get, post, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn sales_flow_feeds_stats_and_category_breakdown() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category["id"]}),
    )
    .await;

    let (status, _) = post(
        &app,
        "/api/orders",
        json!({
            "tableId": null,
            "discount": "0",
            "discountType": "amount",
            "status": "completed",
            "items": [{"productId": product["id"], "quantity": 3, "price": "2.00"}],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, stats) = get(&app, "/api/dashboard/stats?filter=all").await;
    assert_eq!(status, StatusCode::OK);
    assert!(stats["totalOrders"].as_u64().unwrap() >= 1);
    assert_eq!(stats["todaySales"], 6.0);
    assert_eq!(stats["todayOrders"], 1);

    let (status, by_category) = get(&app, "/api/dashboard/sales-by-category?filter=all").await;
    assert_eq!(status, StatusCode::OK);
    let rows = by_category.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "Drinks");
    assert_eq!(rows[0]["revenue"], 6.0);
}

#[tokio::test]
async fn total_orders_is_lifetime_while_window_fields_filter() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category["id"]}),
    )
    .await;
    post(
        &app,
        "/api/orders",
        json!({
            "status": "completed",
            "items": [{"productId": product["id"], "quantity": 1, "price": "2.00"}],
        }),
    )
    .await;

    // A window in the distant past contains no sales, but the lifetime
    // completed count still reflects the order placed above.
    let (status, stats) = get(&app, "/api/dashboard/stats?filter=custom&date=2000-01-02").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["todaySales"], 0.0);
    assert_eq!(stats["todayOrders"], 0);
    assert_eq!(stats["totalOrders"], 1);
}

#[tokio::test]
async fn non_completed_orders_never_count_as_sales() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category["id"]}),
    )
    .await;

    for status_name in ["draft", "qr-pending"] {
        post(
            &app,
            "/api/orders",
            json!({
                "status": status_name,
                "orderSource": if status_name == "qr-pending" { "qr" } else { "pos" },
                "items": [{"productId": product["id"], "quantity": 1, "price": "2.00"}],
            }),
        )
        .await;
    }

    let (_, stats) = get(&app, "/api/dashboard/stats?filter=all").await;
    assert_eq!(stats["todaySales"], 0.0);
    assert_eq!(stats["todayOrders"], 0);
    assert_eq!(stats["totalOrders"], 0);

    let (_, popular) = get(&app, "/api/dashboard/popular-products?filter=all").await;
    assert!(popular.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn payment_methods_group_and_sort() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category["id"]}),
    )
    .await;
    let product_id = product["id"].clone();

    for (method, quantity) in [(Some("cash"), 1), (None, 3), (Some("cash"), 2)] {
        post(
            &app,
            "/api/orders",
            json!({
                "status": "completed",
                "paymentMethod": method,
                "items": [{"productId": product_id, "quantity": quantity, "price": "2.00"}],
            }),
        )
        .await;
    }

    let (status, rows) = get(&app, "/api/dashboard/sales-by-payment-method?filter=all").await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["paymentMethod"], "cash");
    assert_eq!(rows[0]["amount"], 6.0);
    assert_eq!(rows[1]["paymentMethod"], "Not specified");
    assert_eq!(rows[1]["amount"], 6.0);
}

#[tokio::test]
async fn recent_orders_come_newest_first() {
    let app = test_app();

    let (_, category) = post(
        &app,
        "/api/categories",
        json!({"name": "Drinks", "slug": "drinks"}),
    )
    .await;
    let (_, product) = post(
        &app,
        "/api/products",
        json!({"name": "Cola", "price": "2.00", "categoryId": category["id"]}),
    )
    .await;

    for quantity in 1..=3 {
        post(
            &app,
            "/api/orders",
            json!({
                "status": "completed",
                "items": [{"productId": product["id"], "quantity": quantity, "price": "2.00"}],
            }),
        )
        .await;
    }

    let (status, rows) = get(&app, "/api/dashboard/recent-orders?filter=all").await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    // Newest first: the last order placed had quantity 3 -> total 6.00
    assert_eq!(rows[0]["total"], "6.00");
}

#[tokio::test]
async fn unknown_filter_defaults_to_today() {
    let app = test_app();
    let (status, stats) = get(&app, "/api/dashboard/stats?filter=fortnight").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["todaySales"], 0.0);
}

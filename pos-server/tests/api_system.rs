//! Settings, health and demo-seed integration tests

mod common;

use common::{get, request, seeded_app, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn settings_materialize_lazily_and_merge_on_put() {
    let app = test_app();

    let (status, settings) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["businessName"], "BondPos POS");
    assert_eq!(settings["currency"], "usd");
    assert_eq!(settings["maxDiscount"], "50");
    assert_eq!(settings["stockThreshold"], 10);
    let id = settings["id"].clone();

    let (status, updated) = request(
        &app,
        "PUT",
        "/api/settings",
        Some(json!({"businessName": "Harbor Grill", "currency": "eur"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Same singleton, merged fields, untouched defaults preserved
    assert_eq!(updated["id"], id);
    assert_eq!(updated["businessName"], "Harbor Grill");
    assert_eq!(updated["currency"], "eur");
    assert_eq!(updated["dateFormat"], "dd-mm-yyyy");
}

#[tokio::test]
async fn demo_seed_serves_the_sample_restaurant() {
    let app = seeded_app();

    let (_, categories) = get(&app, "/api/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 5);

    let (_, products) = get(&app, "/api/products").await;
    assert_eq!(products.as_array().unwrap().len(), 24);

    let (_, tables) = get(&app, "/api/tables").await;
    assert_eq!(tables.as_array().unwrap().len(), 8);

    // Three QR orders wait in the queue, with resolvable items
    let (_, queue) = get(&app, "/api/orders/qr").await;
    let queue = queue.as_array().unwrap();
    assert_eq!(queue.len(), 3);
    assert!(!queue[0]["items"].as_array().unwrap().is_empty());

    // Four completed demo sales
    let (_, sales) = get(&app, "/api/sales").await;
    assert_eq!(sales.as_array().unwrap().len(), 4);

    // Lifetime completed count shows up regardless of window
    let (_, stats) = get(&app, "/api/dashboard/stats?filter=custom&date=1999-01-02").await;
    assert_eq!(stats["totalOrders"], 4);
}

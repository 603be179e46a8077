//! Dashboard API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/stats", get(handler::stats))
        .route("/sales-by-category", get(handler::sales_by_category))
        .route(
            "/sales-by-payment-method",
            get(handler::sales_by_payment_method),
        )
        .route("/popular-products", get(handler::popular_products))
        .route("/recent-orders", get(handler::recent_orders))
}

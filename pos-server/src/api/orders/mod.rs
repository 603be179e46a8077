//! Order API 模块

mod handler;

use axum::{Router, routing::get, routing::patch};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/orders", routes())
        // 销售记录 = 已完成订单
        .route("/api/sales", get(handler::sales))
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/drafts", get(handler::drafts))
        .route("/qr", get(handler::qr_orders))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/items", get(handler::items))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}/accept", patch(handler::accept))
        .route("/{id}/reject", patch(handler::reject))
}

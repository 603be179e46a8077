//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{
    Order, OrderCreate, OrderItemInput, OrderItemWithProduct, OrderUpdate, OrderWithItems,
};
use shared::order::OrderStatus;

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::validation::{validate_non_negative, validate_quantity};
use crate::utils::{AppError, AppResult};

/// POST /api/orders 请求体：订单字段 + 行项目
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(flatten)]
    pub order: OrderCreate,
    pub items: Vec<OrderItemInput>,
}

/// GET /api/orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/orders/:id - 获取单个订单（含行项目）
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderWithItems>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id_with_items(&id)
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// GET /api/orders/:id/items - 获取订单行项目（关联商品）
pub async fn items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<OrderItemWithProduct>>> {
    let repo = OrderRepository::new(state.db.clone());
    if repo.find_by_id(&id).is_none() {
        return Err(AppError::not_found(format!("Order {} not found", id)));
    }
    Ok(Json(repo.items_with_products(&id)))
}

/// GET /api/orders/drafts - 草稿订单列表（含行项目）
pub async fn drafts(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithItems>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_drafts()))
}

/// GET /api/orders/qr - QR 待接单队列（含行项目）
pub async fn qr_orders(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderWithItems>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_qr_pending()))
}

/// GET /api/sales - 销售记录（已完成订单）
pub async fn sales(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.find_completed()))
}

/// POST /api/orders - 创建订单及行项目，占用桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderWithItems>)> {
    for item in &payload.items {
        validate_quantity(item.quantity, "quantity")?;
        validate_non_negative(item.price, "price")?;
    }
    validate_non_negative(payload.order.discount, "discount")?;

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create_with_items(payload.order, payload.items)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/orders/:id - 更新订单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    if let Some(discount) = payload.discount {
        validate_non_negative(discount, "discount")?;
    }

    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: OrderStatus,
}

/// PATCH /api/orders/:id/status - 状态流转（经状态机校验）
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.update_status(&id, body.status)?))
}

/// PATCH /api/orders/:id/accept - 接受 QR 订单
pub async fn accept(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.update_status(&id, OrderStatus::Pending)?))
}

/// PATCH /api/orders/:id/reject - 拒绝 QR 订单
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    Ok(Json(repo.update_status(&id, OrderStatus::Cancelled)?))
}

/// DELETE /api/orders/:id - 删除订单（级联删除行项目）
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = OrderRepository::new(state.db.clone());
    if !repo.delete(&id)? {
        return Err(AppError::not_found(format!("Order {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

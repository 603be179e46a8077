//! Purchase API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{Purchase, PurchaseCreate, PurchaseUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::PurchaseRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/purchases - 获取所有采购
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Purchase>>> {
    let repo = PurchaseRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/purchases/:id - 获取单个采购
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Purchase>> {
    let repo = PurchaseRepository::new(state.db.clone());
    let purchase = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Purchase {} not found", id)))?;
    Ok(Json(purchase))
}

/// POST /api/purchases - 创建采购
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PurchaseCreate>,
) -> AppResult<(StatusCode, Json<Purchase>)> {
    validate_required_text(&payload.item_name, "itemName", MAX_NAME_LEN)?;
    validate_non_negative(payload.quantity, "quantity")?;
    validate_non_negative(payload.price, "price")?;

    let repo = PurchaseRepository::new(state.db.clone());
    let purchase = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

/// PATCH /api/purchases/:id - 更新采购
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PurchaseUpdate>,
) -> AppResult<Json<Purchase>> {
    if let Some(quantity) = payload.quantity {
        validate_non_negative(quantity, "quantity")?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "price")?;
    }

    let repo = PurchaseRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/purchases/:id - 删除采购
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = PurchaseRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Purchase {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

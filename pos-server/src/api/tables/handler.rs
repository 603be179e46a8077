//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::DiningTableRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", id)))?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    validate_required_text(&payload.table_number, "tableNumber", MAX_SHORT_TEXT_LEN)?;

    let repo = DiningTableRepository::new(state.db.clone());
    let table = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(table)))
}

/// PATCH /api/tables/:id - 更新桌台
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(ref number) = payload.table_number {
        validate_required_text(number, "tableNumber", MAX_SHORT_TEXT_LEN)?;
    }

    let repo = DiningTableRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

/// PATCH /api/tables/:id/status - 直接设置桌台状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<Json<DiningTable>> {
    validate_required_text(&body.status, "status", MAX_SHORT_TEXT_LEN)?;

    let repo = DiningTableRepository::new(state.db.clone());
    Ok(Json(repo.update_status(&id, body.status)?))
}

/// DELETE /api/tables/:id - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = DiningTableRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Table {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

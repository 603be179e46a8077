//! Leave API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{Leave, LeaveCreate, LeaveUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::LeaveRepository;
use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub employee_id: Option<String>,
}

/// GET /api/leaves?employeeId= - 请假记录，可按员工过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Leave>>> {
    let repo = LeaveRepository::new(state.db.clone());
    let leaves = match query.employee_id {
        Some(ref employee_id) => repo.find_by_employee(employee_id),
        None => repo.find_all(),
    };
    Ok(Json(leaves))
}

/// GET /api/leaves/:id - 获取单条请假记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Leave>> {
    let repo = LeaveRepository::new(state.db.clone());
    let leave = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Leave {} not found", id)))?;
    Ok(Json(leave))
}

/// POST /api/leaves - 创建请假记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LeaveCreate>,
) -> AppResult<(StatusCode, Json<Leave>)> {
    validate_required_text(&payload.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.leave_type, "leaveType", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.reason, "reason", MAX_NOTE_LEN)?;

    let repo = LeaveRepository::new(state.db.clone());
    let leave = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(leave)))
}

/// PATCH /api/leaves/:id - 更新请假记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LeaveUpdate>,
) -> AppResult<Json<Leave>> {
    validate_optional_text(&payload.reason, "reason", MAX_NOTE_LEN)?;

    let repo = LeaveRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/leaves/:id - 删除请假记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = LeaveRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Leave {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{Attendance, AttendanceCreate, AttendanceUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::AttendanceRepository;
use crate::utils::time::parse_date;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub date: Option<String>,
    pub employee_id: Option<String>,
}

/// GET /api/attendance?date=&employeeId= - 考勤记录，可按日期或员工过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Attendance>>> {
    let repo = AttendanceRepository::new(state.db.clone());
    let records = if let Some(ref date) = query.date {
        repo.find_by_date(parse_date(date)?)
    } else if let Some(ref employee_id) = query.employee_id {
        repo.find_by_employee(employee_id)
    } else {
        repo.find_all()
    };
    Ok(Json(records))
}

/// POST /api/attendance - 创建考勤记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    validate_required_text(&payload.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;

    let repo = AttendanceRepository::new(state.db.clone());
    let record = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/attendance/:id - 更新考勤记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AttendanceUpdate>,
) -> AppResult<Json<Attendance>> {
    let repo = AttendanceRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/attendance/:id - 删除考勤记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = AttendanceRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!(
            "Attendance record {} not found",
            id
        )));
    }
    Ok(Json(DeleteResponse::ok()))
}

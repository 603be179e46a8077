//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/employees - 获取所有员工
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/employees/:id - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// POST /api/employees - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_required_text(&payload.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    validate_required_text(&payload.department, "department", MAX_NAME_LEN)?;
    validate_non_negative(payload.salary, "salary")?;

    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PATCH /api/employees/:id - 更新员工
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(salary) = payload.salary {
        validate_non_negative(salary, "salary")?;
    }

    let repo = EmployeeRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/employees/:id - 删除员工
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Employee {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

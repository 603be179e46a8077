//! Staff Salary API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{StaffSalary, StaffSalaryCreate, StaffSalaryUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::StaffSalaryRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/staff-salaries - 获取所有薪资发放记录
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffSalary>>> {
    let repo = StaffSalaryRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/staff-salaries/:id - 获取单条薪资发放记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StaffSalary>> {
    let repo = StaffSalaryRepository::new(state.db.clone());
    let salary = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Staff salary {} not found", id)))?;
    Ok(Json(salary))
}

/// POST /api/staff-salaries - 创建薪资发放记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffSalaryCreate>,
) -> AppResult<(StatusCode, Json<StaffSalary>)> {
    validate_required_text(&payload.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.salary_amount, "salaryAmount")?;
    validate_non_negative(payload.total_salary, "totalSalary")?;

    let repo = StaffSalaryRepository::new(state.db.clone());
    let salary = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(salary)))
}

/// PATCH /api/staff-salaries/:id - 更新薪资发放记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StaffSalaryUpdate>,
) -> AppResult<Json<StaffSalary>> {
    if let Some(amount) = payload.salary_amount {
        validate_non_negative(amount, "salaryAmount")?;
    }
    if let Some(total) = payload.total_salary {
        validate_non_negative(total, "totalSalary")?;
    }

    let repo = StaffSalaryRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/staff-salaries/:id - 删除薪资发放记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = StaffSalaryRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!(
            "Staff salary {} not found",
            id
        )));
    }
    Ok(Json(DeleteResponse::ok()))
}

//! Payroll API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{Payroll, PayrollCreate, PayrollUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::PayrollRepository;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub employee_id: Option<String>,
}

/// GET /api/payroll?employeeId= - 工资单，可按员工过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Payroll>>> {
    let repo = PayrollRepository::new(state.db.clone());
    let payroll = match query.employee_id {
        Some(ref employee_id) => repo.find_by_employee(employee_id),
        None => repo.find_all(),
    };
    Ok(Json(payroll))
}

/// GET /api/payroll/:id - 获取单条工资单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payroll>> {
    let repo = PayrollRepository::new(state.db.clone());
    let payroll = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Payroll {} not found", id)))?;
    Ok(Json(payroll))
}

/// POST /api/payroll - 创建工资单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollCreate>,
) -> AppResult<(StatusCode, Json<Payroll>)> {
    validate_required_text(&payload.employee_id, "employeeId", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.month, "month", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.year, "year", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.base_salary, "baseSalary")?;
    validate_non_negative(payload.net_salary, "netSalary")?;

    let repo = PayrollRepository::new(state.db.clone());
    let payroll = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(payroll)))
}

/// PATCH /api/payroll/:id - 更新工资单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PayrollUpdate>,
) -> AppResult<Json<Payroll>> {
    if let Some(base_salary) = payload.base_salary {
        validate_non_negative(base_salary, "baseSalary")?;
    }
    if let Some(net_salary) = payload.net_salary {
        validate_non_negative(net_salary, "netSalary")?;
    }

    let repo = PayrollRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/payroll/:id - 删除工资单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = PayrollRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Payroll {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

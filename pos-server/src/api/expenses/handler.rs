//! Expense API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{Expense, ExpenseCreate, ExpenseUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::ExpenseRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/expenses - 获取所有支出
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Expense>>> {
    let repo = ExpenseRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/expenses/:id - 获取单个支出
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Expense>> {
    let repo = ExpenseRepository::new(state.db.clone());
    let expense = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Expense {} not found", id)))?;
    Ok(Json(expense))
}

/// POST /api/expenses - 创建支出
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_non_negative(payload.amount, "amount")?;
    validate_non_negative(payload.quantity, "quantity")?;
    validate_non_negative(payload.total, "total")?;

    let repo = ExpenseRepository::new(state.db.clone());
    let expense = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// PATCH /api/expenses/:id - 更新支出
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> AppResult<Json<Expense>> {
    if let Some(amount) = payload.amount {
        validate_non_negative(amount, "amount")?;
    }
    if let Some(total) = payload.total {
        validate_non_negative(total, "total")?;
    }

    let repo = ExpenseRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/expenses/:id - 删除支出
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = ExpenseRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Expense {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

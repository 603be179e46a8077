//! Expense Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{ExpenseCategory, ExpenseCategoryCreate, ExpenseCategoryUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::ExpenseCategoryRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

/// GET /api/expense-categories - 获取所有支出分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ExpenseCategory>>> {
    let repo = ExpenseCategoryRepository::new(state.db.clone());
    Ok(Json(repo.find_all()))
}

/// GET /api/expense-categories/:id - 获取单个支出分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ExpenseCategory>> {
    let repo = ExpenseCategoryRepository::new(state.db.clone());
    let category = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Expense category {} not found", id)))?;
    Ok(Json(category))
}

/// POST /api/expense-categories - 创建支出分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCategoryCreate>,
) -> AppResult<(StatusCode, Json<ExpenseCategory>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = ExpenseCategoryRepository::new(state.db.clone());
    let category = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH /api/expense-categories/:id - 更新支出分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseCategoryUpdate>,
) -> AppResult<Json<ExpenseCategory>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = ExpenseCategoryRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/expense-categories/:id - 删除支出分类
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = ExpenseCategoryRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!(
            "Expense category {} not found",
            id
        )));
    }
    Ok(Json(DeleteResponse::ok()))
}

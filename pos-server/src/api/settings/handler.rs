//! Settings API Handlers

use axum::{Json, extract::State};

use shared::models::{Settings, SettingsUpdate};

use crate::core::ServerState;
use crate::db::repository::SettingsRepository;
use crate::utils::AppResult;

/// GET /api/settings - 读取设置（首次读取时生成默认值）
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Settings>> {
    let repo = SettingsRepository::new(state.db.clone());
    Ok(Json(repo.get()))
}

/// PUT /api/settings - 部分更新设置
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<SettingsUpdate>,
) -> AppResult<Json<Settings>> {
    let repo = SettingsRepository::new(state.db.clone());
    Ok(Json(repo.update(payload)))
}

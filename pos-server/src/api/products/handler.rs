//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::api::DeleteResponse;
use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_non_negative, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category_id: Option<String>,
}

/// GET /api/products?categoryId= - 获取商品，可按分类过滤
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = match query.category_id {
        Some(category_id) => repo.find_by_category(&category_id),
        None => repo.find_all(),
    };
    Ok(Json(products))
}

/// GET /api/products/:id - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
    Ok(Json(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_non_negative(payload.price, "price")?;
    if let Some(cost) = payload.purchase_cost {
        validate_non_negative(cost, "purchaseCost")?;
    }
    if let Some(quantity) = payload.quantity {
        validate_non_negative(quantity, "quantity")?;
    }

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /api/products/:id - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_non_negative(price, "price")?;
    }

    let repo = ProductRepository::new(state.db.clone());
    Ok(Json(repo.update(&id, payload)?))
}

/// DELETE /api/products/:id - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = ProductRepository::new(state.db.clone());
    if !repo.delete(&id) {
        return Err(AppError::not_found(format!("Product {} not found", id)));
    }
    Ok(Json(DeleteResponse::ok()))
}

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类管理接口
//! - [`products`] - 商品管理接口
//! - [`tables`] - 桌台管理接口
//! - [`orders`] - 订单管理接口 (含草稿、QR 队列、销售记录)
//! - [`dashboard`] - 仪表盘统计接口
//! - [`expense_categories`] / [`expenses`] - 支出管理接口
//! - [`purchases`] - 采购管理接口
//! - [`employees`] / [`attendance`] / [`leaves`] / [`payroll`] /
//!   [`staff_salaries`] - 人事管理接口
//! - [`settings`] - 系统设置接口

pub mod health;

// Catalog and floor
pub mod categories;
pub mod products;
pub mod tables;

// Orders and reporting
pub mod dashboard;
pub mod orders;

// Money out
pub mod expense_categories;
pub mod expenses;
pub mod purchases;

// HR
pub mod attendance;
pub mod employees;
pub mod leaves;
pub mod payroll;
pub mod staff_salaries;

// System
pub mod settings;

use axum::Router;
use serde::Serialize;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Body returned by every DELETE endpoint
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Combined API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .merge(expense_categories::router())
        .merge(expenses::router())
        .merge(purchases::router())
        .merge(employees::router())
        .merge(attendance::router())
        .merge(leaves::router())
        .merge(payroll::router())
        .merge(staff_salaries::router())
        .merge(settings::router())
}

//! Dashboard API Handlers
//!
//! 所有接口共用 `?filter=&date=` 查询参数；filter 省略时按 "today"。

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use shared::models::Order;

use crate::core::ServerState;
use crate::reporting::{
    CategorySales, DashboardStats, DateWindow, PaymentMethodSales, PopularProduct,
    ReportingEngine,
};
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub filter: Option<String>,
    pub date: Option<String>,
}

impl WindowQuery {
    fn window(&self) -> DateWindow {
        DateWindow::resolve(
            self.filter.as_deref().unwrap_or("today"),
            self.date.as_deref(),
        )
    }
}

/// GET /api/dashboard/stats - 仪表盘统计
pub async fn stats(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<DashboardStats>> {
    let engine = ReportingEngine::new(state.db.clone());
    Ok(Json(engine.dashboard_stats(&query.window())))
}

/// GET /api/dashboard/sales-by-category - 分类销售额
pub async fn sales_by_category(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Vec<CategorySales>>> {
    let engine = ReportingEngine::new(state.db.clone());
    Ok(Json(engine.sales_by_category(&query.window())))
}

/// GET /api/dashboard/sales-by-payment-method - 支付方式销售额
pub async fn sales_by_payment_method(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Vec<PaymentMethodSales>>> {
    let engine = ReportingEngine::new(state.db.clone());
    Ok(Json(engine.sales_by_payment_method(&query.window())))
}

/// GET /api/dashboard/popular-products - 热销商品 Top 5
pub async fn popular_products(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Vec<PopularProduct>>> {
    let engine = ReportingEngine::new(state.db.clone());
    Ok(Json(engine.popular_products(&query.window())))
}

/// GET /api/dashboard/recent-orders - 最近完成的订单（最多 10 条）
pub async fn recent_orders(
    State(state): State<ServerState>,
    Query(query): Query<WindowQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let engine = ReportingEngine::new(state.db.clone());
    Ok(Json(engine.recent_orders(&query.window())))
}

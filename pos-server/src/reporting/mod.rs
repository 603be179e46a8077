//! 报表模块 - 仪表盘统计
//!
//! - [`window`] - 日期窗口解析 (today / yesterday / this-week / custom / all)
//! - [`engine`] - 聚合计算，每次请求全量重算
//!
//! 引擎只读存储，不做缓存；写入后的下一次请求自然看到新数据。

pub mod engine;
pub mod window;

pub use engine::{
    CategorySales, DashboardStats, PaymentMethodSales, PopularProduct, ReportingEngine,
};
pub use window::DateWindow;

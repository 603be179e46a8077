//! 订单领域逻辑
//!
//! - [`money`] - 订单金额计算（小计、折扣、总价）
//!
//! 订单的创建/状态流转/删除在 `db::repository::order` 中实现，
//! 金额计算保持为纯函数以便单独测试。

pub mod money;

pub use money::{OrderTotals, effective_discount, line_total, order_totals};

//! BondPos POS Server - 餐厅收银系统后端
//!
//! # 架构概述
//!
//! 本模块是 POS 后端的主入口，提供以下核心功能：
//!
//! - **存储** (`db`): 进程内 HashMap 存储 + repository 层
//! - **订单** (`orders`): 金额计算与状态机
//! - **报表** (`reporting`): 仪表盘聚合统计
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 存储层 (含 seed 演示数据)
//! ├── orders/        # 订单金额计算
//! ├── reporting/     # 仪表盘聚合
//! └── utils/         # 工具函数
//! ```
//!
//! 所有数据随进程退出丢失：没有持久化后端，这是运行模型的一部分。

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod reporting;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, app};
pub use crate::db::Database;
pub use crate::reporting::{DateWindow, ReportingEngine};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____                  ______
   / __ )____  ____  ____/ / __ \____  _____
  / __  / __ \/ __ \/ __  / /_/ / __ \/ ___/
 / /_/ / /_/ / / / / /_/ / ____/ /_/ (__  )
/_____/\____/_/ /_/\__,_/_/    \____/____/
    "#
    );
}

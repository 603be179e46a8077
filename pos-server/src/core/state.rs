use crate::core::Config;
use crate::db::Database;

/// 服务器状态 - 持有配置和存储的共享引用
///
/// ServerState 是每个 handler 的 axum `State`。`Database` 内部是
/// `Arc`，克隆成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config);
/// let repo = ProductRepository::new(state.db.clone());
/// ```
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 进程内存储
    pub db: Database,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按配置决定是否载入演示数据。
    pub fn initialize(config: &Config) -> Self {
        let db = if config.seed_demo_data {
            tracing::info!("Loading demo dataset");
            Database::seeded()
        } else {
            Database::new()
        };
        Self::new(config.clone(), db)
    }
}

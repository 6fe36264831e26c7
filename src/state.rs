//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。启动后只读，请求路径上无锁。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ThreatService;

/// 应用共享状态
pub struct AppState {
    /// 启动时加载的配置
    pub config: AppConfig,
    /// 威胁新闻服务
    pub threats: ThreatService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: AppConfig) -> Self {
        let threats = ThreatService::from_config(&config);
        Self { config, threats }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Arc<AppState> {
    Arc::new(AppState::new(config))
}

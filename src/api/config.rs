//! 配置查看端点

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::utils::mask_api_key;

/// 配置响应（隐藏 api_key 的实际值）
#[derive(Serialize)]
pub struct ConfigResponse {
    /// 是否已设置 API 密钥
    pub api_key_set: bool,
    /// 脱敏后的密钥
    pub api_key_masked: String,
    /// NewsAPI 基础 URL
    pub news_api_base_url: String,
    /// 默认城市
    pub default_location: String,
    /// 威胁关键词
    pub keywords: Vec<String>,
    /// 每次请求的文章数
    pub page_size: u32,
    /// 文章语言
    pub language: String,
    /// 时间窗口（月）
    pub lookback_months: u32,
    /// 允许跨域的来源
    pub cors_origins: Vec<String>,
}

impl From<&AppConfig> for ConfigResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key_set: !config.news_api_key.is_empty(),
            api_key_masked: mask_api_key(&config.news_api_key),
            news_api_base_url: config.news_api_base_url.clone(),
            default_location: config.default_location.clone(),
            keywords: config.keywords.clone(),
            page_size: config.page_size,
            language: config.language.clone(),
            lookback_months: config.lookback_months,
            cors_origins: config.cors_origins.clone(),
        }
    }
}

/// 获取当前配置
async fn get_config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse::from(&state.config))
}

/// 创建配置路由
pub fn config_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/config", get(get_config_handler))
}

//! API 路由模块

mod config;
mod health;
mod pages;
mod threats;

pub use config::config_routes;
pub use health::health_routes;
pub use pages::page_routes;
pub use threats::threats_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有路由（页面 + API）
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(health_routes())
        .merge(config_routes())
        .merge(threats_routes())
        .with_state(state)
}

//! 应用组装
//!
//! 合并路由、挂载静态资源目录，并按配置加上 CORS 与请求追踪中间件。

use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::create_api_routes;
use crate::state::AppState;

/// 根据配置构建 CORS 层
///
/// - 来源列表为空：不启用 CORS
/// - 包含 `*`：允许任意来源，不允许携带凭证
/// - 其他：仅允许列出的来源，允许凭证，方法和请求头按预检请求回显
pub fn build_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    if origins.iter().any(|o| o.trim() == "*") {
        return Some(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
    )
}

/// 创建完整应用
pub fn create_app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();
    let cors = build_cors_layer(&state.config.cors_origins);

    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&state)))
        .nest_service("/static", ServeDir::new(static_dir));

    let app = match cors {
        Some(cors) => {
            info!("CORS enabled for: {:?}", state.config.cors_origins);
            app.layer(cors)
        }
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
}

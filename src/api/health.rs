//! 存活探测端点
//!
//! 只说明进程在响应请求，不访问 NewsAPI。

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;

async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /api/health`
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(liveness))
}

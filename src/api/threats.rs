//! 威胁新闻端点

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::models::{ThreatsQuery, ThreatsResponse};
use crate::state::AppState;

/// 查询城市威胁新闻
///
/// 查询参数按原始键值对提取，重复的 location 取最后一个；上游失败时仍返回 200 和空列表。
async fn get_threats(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ThreatsResponse> {
    let query = ThreatsQuery::from_pairs(pairs);
    info!("Threats requested: location={:?}", query.location);

    let news = state.threats.threats_for(query.location.as_deref()).await;
    Json(ThreatsResponse { news })
}

/// 创建威胁新闻路由
pub fn threats_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/threats", get(get_threats))
}

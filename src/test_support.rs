//! 测试辅助：本地伪造的 NewsAPI 服务

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// 伪造服务的固定响应
pub enum FakeReply {
    /// 200 + 给定文章数组
    Articles(Value),
    /// 指定状态码 + NewsAPI 风格错误体
    Status(u16),
    /// 200 + 非 JSON 响应体
    Garbage,
    /// 200 + status 为 "error" 的响应体
    ErrorBody,
}

#[derive(Clone)]
struct FakeState {
    reply: Arc<FakeReply>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// 运行中的伪造服务
pub struct FakeNewsApi {
    pub base_url: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeNewsApi {
    /// 最近一次请求的查询参数
    pub fn last_query(&self) -> Option<HashMap<String, String>> {
        self.queries.lock().last().cloned()
    }

    /// 收到的请求数
    pub fn hits(&self) -> usize {
        self.queries.lock().len()
    }
}

async fn everything(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().push(params);

    match state.reply.as_ref() {
        FakeReply::Articles(articles) => {
            let total = articles.as_array().map(Vec::len).unwrap_or(0);
            Json(json!({
                "status": "ok",
                "totalResults": total,
                "articles": articles
            }))
            .into_response()
        }
        FakeReply::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = Json(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            }));
            (status, body).into_response()
        }
        FakeReply::Garbage => (StatusCode::OK, "<html>oops</html>").into_response(),
        FakeReply::ErrorBody => Json(json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        }))
        .into_response(),
    }
}

/// 在随机端口启动伪造的 NewsAPI
pub async fn spawn_fake_newsapi(reply: FakeReply) -> FakeNewsApi {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        reply: Arc::new(reply),
        queries: Arc::clone(&queries),
    };

    let app = Router::new()
        .route("/v2/everything", get(everything))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeNewsApi {
        base_url: format!("http://{}", addr),
        queries,
    }
}

/// 三篇样例文章
pub fn sample_articles() -> Value {
    json!([
        {
            "source": {"id": null, "name": "Times of India"},
            "author": "TOI Staff",
            "title": "Massive fire at Surat textile market",
            "description": "Fire tenders battled the blaze for six hours.",
            "url": "https://example.com/fire",
            "urlToImage": null,
            "publishedAt": "2024-05-02T08:30:00Z",
            "content": "A major fire broke out..."
        },
        {
            "source": {"id": null, "name": "Gujarat Samachar"},
            "author": null,
            "title": "Chain snatchers target morning walkers",
            "description": null,
            "url": "https://example.com/theft",
            "urlToImage": null,
            "publishedAt": "2024-05-01T06:00:00Z",
            "content": null
        },
        {
            "source": {"id": "the-hindu", "name": "The Hindu"},
            "author": "Reporter",
            "title": "Shooting reported near station; riot police deployed",
            "description": "Police said one person was injured.",
            "url": "https://example.com/shooting",
            "urlToImage": "https://example.com/img.jpg",
            "publishedAt": "2024-04-30T21:15:00Z",
            "content": "..."
        }
    ])
}

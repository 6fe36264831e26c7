//! SafeSpace - Rust Backend
//!
//! 使用 axum 框架构建的后端服务：提供首页与静态资源，并通过 `/api/threats`
//! 查询城市相关的威胁新闻，为每篇文章附加安全建议。

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod config;
mod error;
mod models;
mod news;
mod services;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use app::create_app;
use config::get_config;
use state::create_shared_state;
use utils::mask_api_key;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safespace_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SafeSpace backend...");

    // 加载并校验配置
    let config = get_config();
    config.validate()?;
    info!(
        "NewsAPI: base_url={}, api_key={}",
        config.news_api_base_url,
        mask_api_key(&config.news_api_key)
    );

    let addr = config.bind_addr();

    // 创建共享状态并构建路由
    let state = create_shared_state(config);
    let app = create_app(state);

    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

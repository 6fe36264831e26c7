//! NewsAPI 客户端

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

use super::format::{build_everything_endpoint, format_date};
use super::types::{NewsApiResponse, NewsArticle, NewsError};

/// 一次搜索请求的参数
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// 搜索语句
    pub query: String,
    /// 时间窗口起点
    pub from: NaiveDate,
    /// 文章语言
    pub language: String,
    /// 返回文章数
    pub page_size: u32,
}

/// NewsAPI 客户端
///
/// 单次请求，不重试。
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    /// 创建新的客户端
    ///
    /// `timeout` 为 None 时不限制请求总时长。
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, NewsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(NewsError::MissingApiKey);
        }

        let base_url = base_url.into();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(NewsError::InvalidBaseUrl(base_url));
        }

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(5)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// 搜索文章
    ///
    /// 仅 HTTP 200 且响应体 status 不为 "error" 时视为成功。
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<NewsArticle>, NewsError> {
        let endpoint = build_everything_endpoint(&self.base_url);
        let from = format_date(request.from);
        let page_size = request.page_size.to_string();

        debug!(
            "NewsAPI request: endpoint={}, q={:?}, from={}",
            endpoint, request.query, from
        );

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("q", request.query.as_str()),
                ("from", from.as_str()),
                ("sortBy", "publishedAt"),
                ("language", request.language.as_str()),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            let message = upstream_message(&error_text);
            error!("NewsAPI error: status={}, message={}", status_code, message);
            return Err(NewsError::ApiError {
                status: status_code,
                message,
            });
        }

        let body = response.bytes().await?;
        let parsed: NewsApiResponse = serde_json::from_slice(&body)?;

        if parsed.status == "error" {
            let message = parsed
                .message
                .or(parsed.code)
                .unwrap_or_else(|| "unknown error".to_string());
            error!("NewsAPI error in body: status={}, message={}", status.as_u16(), message);
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            "NewsAPI response: total_results={}, articles={}",
            parsed.total_results,
            parsed.articles.len()
        );

        Ok(parsed.articles)
    }
}

/// 从错误响应体中提取可读信息
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<NewsApiResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| body.chars().take(500).collect())
}

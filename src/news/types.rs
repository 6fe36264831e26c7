//! NewsAPI 类型定义

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 新闻文章
///
/// 只解析需要的字段，其余字段（source、author、url 等）原样透传给前端。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// 标题
    #[serde(default)]
    pub title: Option<String>,
    /// 摘要
    #[serde(default)]
    pub description: Option<String>,
    /// 发布时间（ISO 8601）
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
    /// 其他透传字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewsArticle {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// NewsAPI `everything` 响应
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "totalResults")]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
    /// 错误码（仅 status = "error" 时存在）
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 新闻请求错误类型
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    /// HTTP 请求错误
    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 未配置 API 密钥
    #[error("NewsAPI key not configured")]
    MissingApiKey,

    /// 基础 URL 无法解析
    #[error("无效的 NewsAPI 地址: {0}")]
    InvalidBaseUrl(String),

    /// 客户端创建失败，服务不可用
    #[error("NewsAPI 客户端不可用: {0}")]
    ClientUnavailable(String),

    /// JSON 解析错误
    #[error("JSON 解析失败: {0}")]
    JsonError(#[from] serde_json::Error),
}

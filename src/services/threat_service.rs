//! 威胁新闻服务
//!
//! 封装 NewsClient，与配置系统集成：构建搜索请求、拉取新闻并为每篇文章附加安全建议。
//! 上游任何失败都只记录日志并返回空列表。

use chrono::{Local, NaiveDate};
use std::time::Duration;
use tracing::{error, info, warn};

use super::advice::{assess_threat, generate_safety_advice};
use crate::config::AppConfig;
use crate::models::ThreatArticle;
use crate::news::{build_search_query, window_start, NewsArticle, NewsClient, NewsError, SearchRequest};

/// 附加到文章上的字段名，透传时先移除上游同名字段
const ENRICHED_FIELDS: [&str; 3] = ["advice", "category", "threatLevel"];

/// 威胁新闻服务
pub struct ThreatService {
    /// 客户端，创建失败时保存失败原因
    client: Result<NewsClient, NewsError>,
    default_location: String,
    keywords: Vec<String>,
    language: String,
    page_size: u32,
    lookback_months: u32,
}

impl ThreatService {
    /// 根据配置创建服务
    ///
    /// 客户端创建失败（未配置密钥、地址无效）时保留失败原因，查询一律返回空列表。
    pub fn from_config(config: &AppConfig) -> Self {
        let timeout = match config.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        let client = NewsClient::new(
            config.news_api_key.as_str(),
            config.news_api_base_url.as_str(),
            timeout,
        );
        match &client {
            Ok(_) => {}
            Err(NewsError::MissingApiKey) => {
                warn!("NewsAPI key not configured; /api/threats will return no articles")
            }
            Err(e) => error!("创建 NewsAPI 客户端失败: {}", e),
        }

        Self {
            client,
            default_location: config.default_location.clone(),
            keywords: config.keywords.clone(),
            language: config.language.clone(),
            page_size: config.page_size,
            lookback_months: config.lookback_months,
        }
    }

    /// 解析查询城市，缺省或空白时使用默认城市
    pub fn resolve_location<'a>(&'a self, location: Option<&'a str>) -> &'a str {
        match location.map(str::trim) {
            Some(city) if !city.is_empty() => city,
            _ => &self.default_location,
        }
    }

    /// 构建搜索请求
    pub fn search_request(&self, city: &str, today: NaiveDate) -> SearchRequest {
        SearchRequest {
            query: build_search_query(city, &self.keywords),
            from: window_start(today, self.lookback_months),
            language: self.language.clone(),
            page_size: self.page_size,
        }
    }

    /// 拉取城市相关新闻
    pub async fn fetch_news(&self, city: &str) -> Result<Vec<NewsArticle>, NewsError> {
        let client = match &self.client {
            Ok(client) => client,
            Err(NewsError::MissingApiKey) => return Err(NewsError::MissingApiKey),
            Err(e) => return Err(NewsError::ClientUnavailable(e.to_string())),
        };
        let request = self.search_request(city, Local::now().date_naive());
        client.search(&request).await
    }

    /// 查询城市威胁新闻并附加安全建议
    pub async fn threats_for(&self, location: Option<&str>) -> Vec<ThreatArticle> {
        let city = self.resolve_location(location);

        let articles = match self.fetch_news(city).await {
            Ok(articles) => articles,
            Err(NewsError::MissingApiKey) => {
                warn!("Skipping news fetch for {}: NewsAPI key not configured", city);
                return Vec::new();
            }
            Err(e) => {
                error!("Failed to fetch news for {}: {}", city, e);
                return Vec::new();
            }
        };

        let threats: Vec<ThreatArticle> = articles.into_iter().map(enrich).collect();
        info!("威胁新闻查询完成 {}: {} 篇", city, threats.len());
        threats
    }
}

/// 为单篇文章附加建议、类别和等级
pub fn enrich(mut article: NewsArticle) -> ThreatArticle {
    for field in ENRICHED_FIELDS {
        article.extra.remove(field);
    }

    let advice = generate_safety_advice(article.title_text(), article.description_text());
    let assessment = assess_threat(article.title_text(), article.description_text());

    ThreatArticle {
        article,
        advice,
        category: assessment.category,
        threat_level: assessment.level,
    }
}

//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use crate::news::NewsArticle;
use crate::services::advice::ThreatCategory;

/// 威胁查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ThreatsQuery {
    /// 城市名，缺省时使用配置中的默认城市
    pub location: Option<String>,
}

impl ThreatsQuery {
    /// 从查询字符串键值对构建，同名参数以最后一个为准，未知参数忽略
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let location = pairs
            .into_iter()
            .filter(|(key, _)| key == "location")
            .map(|(_, value)| value)
            .last();
        Self { location }
    }
}

/// 附带安全建议的文章
///
/// 上游文章字段原样展开，额外追加 advice、category、threatLevel。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatArticle {
    #[serde(flatten)]
    pub article: NewsArticle,
    /// 安全建议（多行）
    pub advice: String,
    /// 威胁类别
    pub category: ThreatCategory,
    /// 威胁等级 (1-10)
    pub threat_level: u8,
}

/// 威胁查询响应
#[derive(Debug, Default, Serialize)]
pub struct ThreatsResponse {
    pub news: Vec<ThreatArticle>,
}

//! 新闻模块
//!
//! 封装 NewsAPI `everything` 接口：搜索语句构建、时间窗口计算和单次 HTTP 请求。

mod client;
mod format;
mod types;

pub use client::{NewsClient, SearchRequest};
pub use format::{build_search_query, window_start};
pub use types::*;

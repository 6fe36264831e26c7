//! 应用配置管理
//!
//! 启动时从 JSON 文件加载配置，环境变量可覆盖敏感项，使用全局单例保存当前配置。

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::AppError;

/// 配置文件路径环境变量
const CONFIG_PATH_ENV: &str = "SAFESPACE_CONFIG";
/// NewsAPI 密钥环境变量
const API_KEY_ENV: &str = "NEWSAPI_KEY";
/// 监听端口环境变量
const PORT_ENV: &str = "SAFESPACE_PORT";

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    // 默认位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// NewsAPI 密钥
    #[serde(default)]
    pub news_api_key: String,

    /// NewsAPI 基础 URL
    #[serde(default = "default_news_api_base_url")]
    pub news_api_base_url: String,

    /// 未指定 location 时使用的城市
    #[serde(default = "default_location")]
    pub default_location: String,

    /// 威胁关键词，按 OR 拼接进搜索语句
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// 每次请求的文章数
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// 文章语言
    #[serde(default = "default_language")]
    pub language: String,

    /// 时间窗口（月）
    #[serde(default = "default_lookback_months")]
    pub lookback_months: u32,

    /// 上游请求超时（秒），0 表示不设超时
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// 允许跨域的来源，为空时不启用 CORS
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// 静态资源目录
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// 页面模板目录
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    8000
}

fn default_news_api_base_url() -> String {
    "https://newsapi.org".to_string()
}

fn default_location() -> String {
    "Surat".to_string()
}

fn default_keywords() -> Vec<String> {
    [
        "attack", "violence", "theft", "shooting", "assault", "kidnap", "fire", "riot",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn default_page_size() -> u32 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_lookback_months() -> u32 {
    1
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            news_api_key: String::new(),
            news_api_base_url: default_news_api_base_url(),
            default_location: default_location(),
            keywords: default_keywords(),
            page_size: default_page_size(),
            language: default_language(),
            lookback_months: default_lookback_months(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_origins: default_cors_origins(),
            static_dir: default_static_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

impl AppConfig {
    /// 服务监听地址
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), AppError> {
        if self.keywords.is_empty() {
            return Err(AppError::Config("keywords 不能为空".to_string()));
        }
        if self.page_size == 0 || self.page_size > 100 {
            return Err(AppError::Config(format!(
                "page_size 必须在 1..=100 之间: {}",
                self.page_size
            )));
        }
        if !self.news_api_base_url.starts_with("http://")
            && !self.news_api_base_url.starts_with("https://")
        {
            return Err(AppError::Config(format!(
                "news_api_base_url 无效: {}",
                self.news_api_base_url
            )));
        }
        Ok(())
    }

    /// 应用环境变量覆盖
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.news_api_key = key.trim().to_string();
            }
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring invalid {}: {}", PORT_ENV, port),
            }
        }
    }
}

/// 全局配置单例
static CONFIG: Lazy<RwLock<AppConfig>> = Lazy::new(|| {
    let mut config = load_config_from_file(&get_config_path()).unwrap_or_default();
    config.apply_env_overrides();
    RwLock::new(config)
});

/// 从文件加载配置
///
/// 文件不存在时返回 None；内容无法解析时记录警告并返回 None。
fn load_config_from_file(path: &Path) -> Option<AppConfig> {
    if !path.exists() {
        return None;
    }

    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("配置文件解析失败 {}: {}", path.display(), e);
            None
        }
    }
}

/// 获取当前配置（克隆）
pub fn get_config() -> AppConfig {
    CONFIG.read().clone()
}

//! 页面端点

use axum::{extract::State, response::Html, routing::get, Router};
use std::io::ErrorKind;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// 首页模板文件名
const INDEX_TEMPLATE: &str = "index.html";

/// HTML 转义，可用于文本和属性值
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 替换模板中的 `{{ name }}` 占位符，值先做 HTML 转义
fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |html, (name, value)| {
        html.replace(&format!("{{{{ {} }}}}", name), &escape_html(value))
    })
}

/// 首页
async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let path = state.config.templates_dir.join(INDEX_TEMPLATE);

    let template = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(format!("模板不存在: {}", path.display())),
        _ => AppError::Internal(format!("读取模板失败 {}: {}", path.display(), e)),
    })?;

    Ok(Html(render_template(
        &template,
        &[("default_location", state.config.default_location.as_str())],
    )))
}

/// 创建页面路由
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

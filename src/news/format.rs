//! 搜索语句、时间窗口和 URL 构建工具

use chrono::{Months, NaiveDate};

/// 修复 base_url
///
/// - 移除末尾斜杠
/// - 修复双斜杠（保留协议部分）
pub fn fix_base_url(base_url: &str) -> String {
    let mut url = base_url.trim_end_matches('/').to_string();

    if let Some(pos) = url.find("://") {
        let (protocol, rest) = url.split_at(pos + 3);
        let fixed_rest = rest.replace("//", "/");
        url = format!("{}{}", protocol, fixed_rest);
    }

    url
}

/// 构建 NewsAPI `everything` 端点
pub fn build_everything_endpoint(base_url: &str) -> String {
    let url = fix_base_url(base_url);

    if url.ends_with("/v2/everything") {
        url
    } else if url.ends_with("/v2") {
        format!("{}/everything", url)
    } else {
        format!("{}/v2/everything", url)
    }
}

/// 构建搜索语句：`"<城市> kw1 OR kw2 OR ..."`
pub fn build_search_query(city: &str, keywords: &[String]) -> String {
    let keywords = keywords.join(" OR ");
    let city = city.trim();
    if city.is_empty() {
        keywords
    } else {
        format!("{} {}", city, keywords)
    }
}

/// 计算时间窗口起点
///
/// 按日历月回退，月末日期收敛到目标月的最后一天（3 月 31 日回退一个月为 2 月末）。
pub fn window_start(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// 日期格式化为 `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        ["attack", "violence", "theft", "shooting", "assault", "kidnap", "fire", "riot"]
            .iter()
            .map(|k| k.to_string())
            .collect()
    }

    #[test]
    fn test_build_everything_endpoint() {
        assert_eq!(
            build_everything_endpoint("https://newsapi.org"),
            "https://newsapi.org/v2/everything"
        );
        assert_eq!(
            build_everything_endpoint("https://newsapi.org/"),
            "https://newsapi.org/v2/everything"
        );
        assert_eq!(
            build_everything_endpoint("https://newsapi.org/v2"),
            "https://newsapi.org/v2/everything"
        );
        assert_eq!(
            build_everything_endpoint("http://127.0.0.1:9000//v2/everything"),
            "http://127.0.0.1:9000/v2/everything"
        );
    }

    #[test]
    fn test_build_search_query() {
        assert_eq!(
            build_search_query("Surat", &keywords()),
            "Surat attack OR violence OR theft OR shooting OR assault OR kidnap OR fire OR riot"
        );
        assert_eq!(
            build_search_query("  New Delhi ", &["fire".to_string()]),
            "New Delhi fire"
        );
        assert_eq!(
            build_search_query("", &["fire".to_string(), "riot".to_string()]),
            "fire OR riot"
        );
    }

    #[test]
    fn test_window_start_calendar_month() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();

        assert_eq!(window_start(d(2024, 5, 15), 1), d(2024, 4, 15));
        assert_eq!(window_start(d(2024, 1, 10), 1), d(2023, 12, 10));
        // 月末收敛
        assert_eq!(window_start(d(2024, 3, 31), 1), d(2024, 2, 29));
        assert_eq!(window_start(d(2023, 3, 31), 1), d(2023, 2, 28));
        assert_eq!(window_start(d(2024, 5, 31), 1), d(2024, 4, 30));
        assert_eq!(window_start(d(2024, 5, 15), 0), d(2024, 5, 15));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(format_date(date), "2024-02-09");
    }
}

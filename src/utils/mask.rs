//! 敏感信息脱敏

/// API 密钥脱敏
///
/// 长度不超过 8 时全部替换为 `*`，否则保留首尾各 4 个字符。
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

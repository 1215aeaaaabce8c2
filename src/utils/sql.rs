//! SQL 辅助函数

/// 转义 LIKE 模式中的通配符
///
/// 搜索关键字作为字面量匹配，% 和 _ 不生效。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("VSTEP B1"), "VSTEP B1");
    }
}

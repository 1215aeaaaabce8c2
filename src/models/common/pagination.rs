use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 普通列表接口的单页上限
pub const MAX_PAGE_LIMIT: i64 = 50;
/// 管理端列表接口的单页上限
pub const ADMIN_MAX_PAGE_LIMIT: i64 = 100;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub limit: i64,
}

impl PaginationQuery {
    /// 返回规范化后的 (page, limit)，page 从 1 开始
    pub fn clamped(&self, max_limit: i64) -> (i64, i64) {
        (self.page.max(1), self.limit.clamp(1, max_limit))
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

// 存储层的分页查询结果，服务层展开进响应信封
#[derive(Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_clamp_limit() {
        let query = PaginationQuery {
            page: 0,
            limit: 500,
        };
        assert_eq!(query.clamped(MAX_PAGE_LIMIT), (1, 50));
        assert_eq!(query.clamped(ADMIN_MAX_PAGE_LIMIT), (1, 100));
    }

    #[test]
    fn test_clamp_lower_bound() {
        let query = PaginationQuery { page: -3, limit: 0 };
        assert_eq!(query.clamped(MAX_PAGE_LIMIT), (1, 1));
    }

    #[test]
    fn test_string_page_deserialization() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page": "2", "limit": "25"}"#)
            .expect("string pagination values should deserialize");
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 25);
    }
}

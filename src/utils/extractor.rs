//! 路径参数安全提取器
//!
//! 在进入处理程序之前解析并校验路径参数，
//! 非法参数直接返回 400，处理程序只拿到合法的 i64。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::ApiResponse;

/// 为路径中的 i64 参数定义提取器
///
/// 参数必须是正整数。生成两个入口：
/// - `FromRequest`：按参数名从 match_info 提取，单参数路由直接用
/// - `Deserialize`：供 `web::Path<(A, B)>` 元组按位置提取
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                futures_util::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::<()>::error_empty(concat!(
                                "Invalid ",
                                $param,
                                " in path"
                            )),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            concat!("Invalid ", $param, " in path"),
                            response,
                        )
                        .into())
                    }
                })
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse::<i64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .map($name)
                    .ok_or_else(|| {
                        serde::de::Error::custom(concat!("Invalid ", $param, " in path"))
                    })
            }
        }
    };
}

define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeMaterialIdI64, "material_id");
define_safe_i64_extractor!(SafeScheduleIdI64, "schedule_id");
define_safe_i64_extractor!(SafeAnnouncementIdI64, "announcement_id");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_i64_extractor!(SafeSubmissionIdI64, "submission_id");

/// 从路径提取邀请码，限制为邀请码字母表内的字符
pub struct SafeInviteCode(pub String);

impl FromRequest for SafeInviteCode {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let code = req
            .match_info()
            .get("code")
            .map(|raw| raw.trim().to_uppercase())
            .filter(|c| {
                (4..=16).contains(&c.len()) && c.chars().all(|ch| ch.is_ascii_alphanumeric())
            });

        ready(match code {
            Some(code) => Ok(SafeInviteCode(code)),
            None => {
                let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                    "Invalid invite code in path",
                ));
                Err(InternalError::from_response("Invalid invite code in path", response).into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_class_id() {
        let req = TestRequest::with_uri("/classes/42")
            .param("class_id", "42")
            .to_http_request();
        let extracted = SafeClassIdI64::extract(&req).await.unwrap();
        assert_eq!(extracted.0, 42);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_class_id() {
        let req = TestRequest::with_uri("/classes/abc")
            .param("class_id", "abc")
            .to_http_request();
        assert!(SafeClassIdI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_rejects_non_positive_class_id() {
        let req = TestRequest::with_uri("/classes/0")
            .param("class_id", "0")
            .to_http_request();
        assert!(SafeClassIdI64::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn test_invite_code_uppercased() {
        let req = TestRequest::with_uri("/preview/abcd2345")
            .param("code", "abcd2345")
            .to_http_request();
        let extracted = SafeInviteCode::extract(&req).await.unwrap();
        assert_eq!(extracted.0, "ABCD2345");
    }
}

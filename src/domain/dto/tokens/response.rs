//! 토큰 엔드포인트 응답 DTO
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// OAuth2 토큰 엔드포인트 응답
///
/// 토큰 엔드포인트가 성공 시 반환하는 JSON 객체입니다.
/// 이 서브시스템은 토큰을 캐시하거나 자동 갱신하지 않으며,
/// 언제 다시 요청할지는 호출자가 결정합니다.
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJSUzI1NiIs...",
///   "token_type": "Bearer",
///   "expires_in": 3599,
///   "scope": "data:read"
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// bearer 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (보통 "Bearer")
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: u64,
    /// 부여된 권한 범위 (서버가 생략할 수 있음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 위 필드 외에 토큰 엔드포인트가 돌려준 필드 (직렬화 시 그대로 다시 내보냄)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for AccessTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("extra_fields", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_is_optional() {
        let body = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#;
        let token: AccessTokenResponse = serde_json::from_str(body).unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.scope, None);
        assert_eq!(serde_json::to_string(&token).unwrap(), body);
    }

    #[test]
    fn test_unknown_fields_survive_reserialization() {
        let body = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600,"scope":"data:read","region":"EMEA"}"#;
        let token: AccessTokenResponse = serde_json::from_str(body).unwrap();

        assert_eq!(token.extra.get("region"), Some(&Value::from("EMEA")));
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            serde_json::from_str::<Value>(body).unwrap()
        );
    }

    #[test]
    fn test_debug_lists_extra_field_names_only() {
        let body = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600,"id_token":"secret-id-token"}"#;
        let token: AccessTokenResponse = serde_json::from_str(body).unwrap();
        let debug = format!("{:?}", token);

        assert!(debug.contains("id_token"));
        assert!(!debug.contains("secret-id-token"));
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let body = r#"{"access_token":"abc","token_type":"Bearer","expires_in":"soon"}"#;
        assert!(serde_json::from_str::<AccessTokenResponse>(body).is_err());
    }

    #[test]
    fn test_debug_hides_access_token() {
        let token = AccessTokenResponse {
            access_token: "very-secret-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
            scope: Some("data:read".to_string()),
            extra: Map::new(),
        };
        assert!(!format!("{:?}", token).contains("very-secret-token"));
    }
}

//! 서비스 계정 생성 요청 DTO
//!
//! 서비스 계정 API로 전송되는 JSON 본문과 그 입력 검증 규칙을 정의합니다.
use serde::Serialize;
use validator::Validate;

/// 서비스 계정 생성 요청
///
/// 인증 서버가 거절할 것이 확실한 요청을 보내지 않도록 이름 길이를 먼저 검증합니다.
///
/// ```json
/// { "name": "test-robot", "firstName": "Rob", "lastName": "Robot" }
/// ```
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceAccountRequest {
    /// 서비스 계정 이름 (5-64자)
    #[validate(length(
        min = 5,
        max = 64,
        message = "service account name must be between 5 and 64 characters"
    ))]
    pub name: String,

    /// 이름
    pub first_name: String,

    /// 성
    pub last_name: String,
}

impl CreateServiceAccountRequest {
    pub fn new(name: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_bounds() {
        assert!(CreateServiceAccountRequest::new("abcd", "Rob", "Robot").validate().is_err());
        assert!(CreateServiceAccountRequest::new("abcde", "Rob", "Robot").validate().is_ok());
        assert!(CreateServiceAccountRequest::new("a".repeat(64), "Rob", "Robot").validate().is_ok());
        assert!(CreateServiceAccountRequest::new("a".repeat(65), "Rob", "Robot").validate().is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 5글자, 15바이트
        assert!(CreateServiceAccountRequest::new("로봇계정용", "Rob", "Robot").validate().is_ok());
    }

    #[test]
    fn test_serializes_camel_case() {
        let request = CreateServiceAccountRequest::new("test-robot", "Rob", "Robot");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"name": "test-robot", "firstName": "Rob", "lastName": "Robot"})
        );
    }
}

//! # Credential Error Handling
//!
//! 자격 증명 발급 서브시스템 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! `/token` 같은 HTTP 엔드포인트에서 그대로 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | CredentialError | 의미 | 재시도 | HTTP Status |
//! |-----------------|------|--------|-------------|
//! | `Validation` | 호출 전 입력 검증 실패 (네트워크 호출 없음) | 불가 | 400 Bad Request |
//! | `ProtocolMisuse` | grant type / assertion 조합 불일치 | 불가 | 400 Bad Request |
//! | `Transport` | 요청 전송 실패, 응답 없음, 타임아웃 | 호출자 판단 | 502 Bad Gateway |
//! | `Cancelled` | 호출자가 취소 신호를 보냄 | 호출자 판단 | 503 Service Unavailable |
//! | `TokenExchange` | 토큰 엔드포인트가 비성공 상태 반환 | 금지 | 502 Bad Gateway |
//! | `Provisioning` | 서비스 계정 API가 비성공 상태 반환 | 금지 (비멱등) | 502 Bad Gateway |
//! | `MalformedResponse` | 성공 상태지만 응답 형식이 계약과 다름 | 금지 | 502 Bad Gateway |
//! | `Signing` | 서명 키가 손상되었거나 지원하지 않는 형식 | 불가 | 500 Internal Server Error |
//! | `Config` | 환경 설정 누락 또는 파싱 실패 | 불가 | 500 Internal Server Error |
//!
//! ## 전파 정책
//!
//! 모든 에러는 상태 코드, 원본 응답 본문, 잘못된 필드 등 전체 컨텍스트와 함께
//! 호출자에게 그대로 반환됩니다. 이 서브시스템은 조용한 복구나 기본값 대체를
//! 하지 않습니다.
//!
//! ```rust,ignore
//! match facade.service_account_token(&client, &account, &scopes, &cancel).await {
//!     Err(CredentialError::TokenExchange { status, raw_body }) => {
//!         log::error!("token endpoint rejected request ({}): {}", status, raw_body);
//!     }
//!     Err(CredentialError::Cancelled) => { /* 호출자가 포기함 */ }
//!     Err(e) => return Err(e),
//!     Ok(token) => { /* ... */ }
//! }
//! ```

use thiserror::Error;

/// 자격 증명 발급 및 서비스 계정 프로비저닝 에러 타입
#[derive(Error, Debug)]
pub enum CredentialError {
    /// 입력값 검증 에러
    ///
    /// 문서화된 전제 조건을 위반한 입력입니다 (이름 길이, 빈 스코프 집합 등).
    /// 네트워크로 전송되지 않습니다.
    #[error("Validation error: {0}")]
    Validation(String),

    /// grant type과 assertion 조합이 맞지 않는 호출
    ///
    /// `client_credentials`에 assertion을 넘기거나, `jwt-bearer`에 assertion을
    /// 넘기지 않은 경우입니다. 요청은 전송되지 않습니다.
    #[error("Protocol misuse: {0}")]
    ProtocolMisuse(String),

    /// 요청을 보내지 못했거나 응답을 받지 못함 (타임아웃 포함)
    #[error("Transport error: {0}")]
    Transport(String),

    /// 호출자가 제공한 취소 신호로 중단됨
    #[error("Request cancelled by caller")]
    Cancelled,

    /// 토큰 엔드포인트가 비성공 상태를 반환함
    ///
    /// `raw_body`는 업스트림 에러 코드/설명 진단을 위해 원문 그대로 보존됩니다.
    #[error("Token exchange failed with status {status}: {raw_body}")]
    TokenExchange { status: u16, raw_body: String },

    /// 서비스 계정 / 키 생성 API가 비성공 상태를 반환함
    #[error("Provisioning failed with status {status}: {raw_body}")]
    Provisioning { status: u16, raw_body: String },

    /// 성공 상태였지만 응답 본문이 기대한 형식이 아님
    #[error("Malformed response ({reason}): {raw_body}")]
    MalformedResponse { raw_body: String, reason: String },

    /// 서명 키 파싱 또는 서명 실패
    #[error("Signing error: {0}")]
    Signing(String),

    /// 환경 설정 누락 또는 파싱 실패
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CredentialError {
    /// 호출자가 같은 요청을 다시 보내도 안전한 에러인지 여부
    ///
    /// 전송 계층 실패와 취소만 재시도 대상입니다. 서버가 응답한 거절은
    /// 프로비저닝 호출이 비멱등이므로 재시도하면 중복 리소스가 생길 수 있습니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CredentialError::Transport(_) | CredentialError::Cancelled)
    }

    /// 업스트림 서버가 응답한 HTTP 상태 코드 (있는 경우)
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            CredentialError::TokenExchange { status, .. }
            | CredentialError::Provisioning { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CredentialError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CredentialError::Transport(format!("request timed out: {}", e))
        } else {
            CredentialError::Transport(e.to_string())
        }
    }
}

impl actix_web::ResponseError for CredentialError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            CredentialError::Validation(_) | CredentialError::ProtocolMisuse(_) => StatusCode::BAD_REQUEST,
            CredentialError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            CredentialError::Transport(_)
            | CredentialError::TokenExchange { .. }
            | CredentialError::Provisioning { .. }
            | CredentialError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            CredentialError::Signing(_) | CredentialError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 업스트림 원문 본문이나 키 관련 세부 정보는 브라우저로 내보내지 않고
    /// 고정된 메시지만 반환합니다. 상세 내용은 서버 로그에 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": "Failed to generate access token"
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, CredentialError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = CredentialError::Validation("name too short".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_protocol_misuse_response() {
        let error = CredentialError::ProtocolMisuse("assertion missing".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_rejection_response() {
        let error = CredentialError::TokenExchange {
            status: 401,
            raw_body: r#"{"error":"invalid_client"}"#.to_string(),
        };
        assert_eq!(error.error_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.upstream_status(), Some(401));
    }

    #[test]
    fn test_cancelled_is_distinct_from_transport() {
        let cancelled = CredentialError::Cancelled;
        let transport = CredentialError::Transport("connection refused".to_string());

        assert_eq!(cancelled.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(transport.status_code(), StatusCode::BAD_GATEWAY);
        assert!(!matches!(cancelled, CredentialError::Transport(_)));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(CredentialError::Transport("reset".to_string()).is_retryable());
        assert!(CredentialError::Cancelled.is_retryable());
        assert!(!CredentialError::Provisioning { status: 409, raw_body: String::new() }.is_retryable());
        assert!(!CredentialError::Validation("x".to_string()).is_retryable());
    }

    #[test]
    fn test_display_preserves_raw_body() {
        let error = CredentialError::Provisioning {
            status: 400,
            raw_body: r#"{"detail":"name taken"}"#.to_string(),
        };
        assert!(error.to_string().contains(r#"{"detail":"name taken"}"#));
    }
}

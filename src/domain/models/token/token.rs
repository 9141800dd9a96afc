//! JWT bearer assertion 클레임 및 서명된 assertion
//!
//! RFC 7523 JWT Bearer grant에 사용되는 assertion의 페이로드와,
//! 서명이 끝난 compact JWT 문자열을 표현합니다.
use std::fmt;

use serde::Serialize;

use crate::domain::models::scope::ScopeSet;

/// assertion 유효 기간 (초)
///
/// 인증 서버가 JWT bearer assertion에 허용하는 최대 수명을 넘지 않아야 합니다.
pub const ASSERTION_LIFETIME_SECS: i64 = 300;

/// JWT bearer assertion의 클레임(Payload) 구조체
///
/// 토큰 요청마다 새로 만들어지며 저장되지 않습니다.
///
/// ## 클레임 구성
///
/// - `iss`: 클라이언트 애플리케이션 ID
/// - `sub`: 서비스 계정 ID
/// - `aud`: 토큰 엔드포인트 URL
/// - `iat`: 발급 시각 (Unix timestamp)
/// - `exp`: 만료 시각, 항상 `iat + 300`
/// - `scope`: 요청 스코프 목록 (JSON 배열)
#[derive(Debug, Serialize)]
pub struct AssertionClaims {
    /// 발급자 (client ID)
    pub iss: String,
    /// 주체 (service account ID)
    pub sub: String,
    /// 대상 (토큰 엔드포인트)
    pub aud: String,
    /// 발급 시각
    pub iat: i64,
    /// 만료 시각
    pub exp: i64,
    /// 요청 스코프
    pub scope: ScopeSet,
}

impl AssertionClaims {
    /// 주어진 시각을 기준으로 클레임을 구성합니다.
    pub fn new(
        issuer_client_id: &str,
        service_account_id: &str,
        audience: &str,
        scopes: &ScopeSet,
        issued_at: i64,
    ) -> Self {
        Self {
            iss: issuer_client_id.to_string(),
            sub: service_account_id.to_string(),
            aud: audience.to_string(),
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
            scope: scopes.clone(),
        }
    }
}

/// 서명된 compact JWT assertion
///
/// 만료 전까지는 bearer 자격 증명과 같으므로 `Debug` 출력에서 값을 숨깁니다.
/// 인증 서버가 한 번 소비하는 일회용 값이라 `Clone`을 구현하지 않습니다.
pub struct SignedAssertion(String);

impl SignedAssertion {
    pub(crate) fn new(jwt: String) -> Self {
        Self(jwt)
    }

    /// compact JWT 문자열
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SignedAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SignedAssertion([REDACTED])")
    }
}

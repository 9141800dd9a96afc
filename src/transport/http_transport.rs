//! transport trait과 요청/응답 타입
use std::fmt;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::{AppResult, CredentialError};

/// 전송할 POST 요청 한 건
#[derive(Clone)]
pub struct PostRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PostRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// 이름이 일치하는 첫 번째 헤더 값 (대소문자 무시)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// Authorization 헤더와 본문(assertion 포함 가능)은 출력하지 않는다
impl fmt::Debug for PostRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("PostRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// 서버가 돌려준 응답 (상태 코드 + 원문 본문)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POST 요청 한 건을 전송하는 transport
///
/// 요청을 보내지 못했거나 응답을 받지 못한 경우에만 `Err(Transport)`를 반환합니다.
/// 비성공 상태 코드도 `Ok(RawResponse)`입니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: PostRequest) -> AppResult<RawResponse>;
}

/// 취소 토큰과 전송을 경쟁시킵니다.
///
/// 취소 분기를 먼저 검사하므로 이미 취소된 토큰으로 호출하면 요청은 전송되지 않습니다.
/// 취소는 `Transport`가 아닌 `Cancelled`로 보고됩니다.
pub async fn send_with_cancel(
    transport: &dyn HttpTransport,
    request: PostRequest,
    cancel: &CancellationToken,
) -> AppResult<RawResponse> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CredentialError::Cancelled),
        result = transport.post(request) => result,
    }
}

//! `reqwest` 기반 transport
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::core::{AppResult, CredentialError};
use crate::transport::{HttpTransport, PostRequest, RawResponse};

/// 운영 환경 transport
///
/// 내부 `reqwest::Client`는 커넥션 풀을 공유하므로 한 번 만들어 재사용합니다.
/// 타임아웃은 클라이언트 수준에서 설정되며 `CredentialError::Transport`로 보고됩니다.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CredentialError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: PostRequest) -> AppResult<RawResponse> {
        debug!("POST {}", request.url);

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body = match String::from_utf8(bytes.to_vec()) {
            Ok(body) => body,
            Err(e) => {
                // 원문 보존이 불가능한 유일한 경우
                warn!("POST {} 응답 본문이 UTF-8이 아님 ({} bytes), 손실 변환", request.url, bytes.len());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        debug!("POST {} -> {}", request.url, status);
        Ok(RawResponse { status, body })
    }
}

//! 서비스 계정 / 키 프로비저닝
//!
//! 서비스 계정 관리 API를 호출해 새 계정과 키 쌍을 만듭니다.
//! 두 호출 모두 쓰기 작업이며 멱등이 아닙니다. 같은 인자로 두 번 호출하면
//! 서버에 리소스가 두 개 생기므로, 실패 후 재시도 여부는 호출자가 판단해야 합니다.
use std::sync::Arc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::core::{AppResult, CredentialError};
use crate::domain::dto::service_accounts::{
    CreateServiceAccountRequest, ServiceAccountKeyRecord, ServiceAccountRecord,
};
use crate::transport::{HttpTransport, PostRequest, RawResponse, send_with_cancel};

/// 서비스 계정 API 클라이언트
///
/// | 작업 | 요청 |
/// |------|------|
/// | 계정 생성 | `POST {endpoint}` + JSON `{name, firstName, lastName}` |
/// | 키 생성 | `POST {endpoint}/{serviceAccountId}/keys` |
///
/// 모든 요청은 `Authorization: Bearer <token>`으로 인증합니다. 토큰은
/// 서비스 계정 관리 스코프를 가진 `client_credentials` 토큰이어야 합니다.
#[derive(Clone)]
pub struct ServiceAccountProvisioner {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
}

impl ServiceAccountProvisioner {
    pub fn new(transport: Arc<dyn HttpTransport>, service_accounts_endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: service_accounts_endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// 서비스 계정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Validation` - 이름이 5-64자가 아닌 경우 (요청은 전송되지 않음)
    /// * `CredentialError::Provisioning` - API가 비성공 상태를 반환한 경우
    /// * `CredentialError::MalformedResponse` - 성공 응답에 `serviceAccountId`/`email`이 없는 경우
    pub async fn create_service_account(
        &self,
        name: &str,
        first_name: &str,
        last_name: &str,
        bearer_token: &str,
        cancel: &CancellationToken,
    ) -> AppResult<ServiceAccountRecord> {
        let payload = CreateServiceAccountRequest::new(name, first_name, last_name);
        payload
            .validate()
            .map_err(|e| CredentialError::Validation(e.to_string()))?;

        let body = serde_json::to_string(&payload)
            .map_err(|e| CredentialError::Validation(format!("failed to encode request: {}", e)))?;

        let request = self
            .authorized(&self.endpoint, bearer_token)
            .header("Content-Type", "application/json")
            .body(body);

        debug!("서비스 계정 생성 요청: name={}", name);
        let response = send_with_cancel(self.transport.as_ref(), request, cancel).await?;
        let record: ServiceAccountRecord = parse_response(response, BodyPolicy::Verbatim)?;

        info!(
            "서비스 계정 생성 완료 (service_account_id: {}, email: {})",
            record.service_account_id, record.email
        );
        Ok(record)
    }

    /// 서비스 계정의 새 키 쌍을 생성합니다.
    ///
    /// 응답의 개인키는 이 시점에만 받을 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Validation` - `service_account_id`가 비어 있는 경우
    /// * `CredentialError::Provisioning` - API가 비성공 상태를 반환한 경우
    /// * `CredentialError::MalformedResponse` - 성공 응답에 `kid`/`privateKey`가 없는 경우
    pub async fn create_key(
        &self,
        service_account_id: &str,
        bearer_token: &str,
        cancel: &CancellationToken,
    ) -> AppResult<ServiceAccountKeyRecord> {
        if service_account_id.trim().is_empty() {
            return Err(CredentialError::Validation(
                "service account id must not be empty".to_string(),
            ));
        }

        let url = format!("{}/{}/keys", self.endpoint, urlencoding::encode(service_account_id));
        let request = self.authorized(&url, bearer_token);

        debug!("서비스 계정 키 생성 요청: service_account_id={}", service_account_id);
        let response = send_with_cancel(self.transport.as_ref(), request, cancel).await?;
        let record: ServiceAccountKeyRecord = parse_response(response, BodyPolicy::Redacted)?;

        info!(
            "서비스 계정 키 생성 완료 (service_account_id: {}, kid: {})",
            service_account_id, record.key_id
        );
        Ok(record)
    }

    fn authorized(&self, url: &str, bearer_token: &str) -> PostRequest {
        PostRequest::new(url)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", bearer_token))
    }
}

/// 성공 응답 파싱 실패 시 본문을 에러에 담는 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyPolicy {
    /// 본문 원문을 그대로 보존
    Verbatim,
    /// 개인키가 들어 있을 수 있는 본문 (길이만 남김)
    Redacted,
}

fn parse_response<T: DeserializeOwned>(response: RawResponse, policy: BodyPolicy) -> AppResult<T> {
    if !response.is_success() {
        warn!("서비스 계정 API 거절: status={}, body={}", response.status, response.body);
        return Err(CredentialError::Provisioning {
            status: response.status,
            raw_body: response.body,
        });
    }

    serde_json::from_str::<T>(&response.body).map_err(|e| {
        let (raw_body, reason) = match policy {
            BodyPolicy::Verbatim => (response.body.clone(), e.to_string()),
            // serde 에러 메시지에도 값 일부가 들어갈 수 있어 위치만 남긴다
            BodyPolicy::Redacted => (
                format!("<{} bytes redacted>", response.body.len()),
                format!("{:?} error at line {} column {}", e.classify(), e.line(), e.column()),
            ),
        };

        warn!("서비스 계정 API 응답 파싱 실패: {} ({} bytes)", reason, response.body.len());
        CredentialError::MalformedResponse { raw_body, reason }
    })
}

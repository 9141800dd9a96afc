//! OAuth2 토큰 엔드포인트 클라이언트
//!
//! `client_credentials`와 `jwt-bearer` 두 grant를 하나의 교환 경로로 처리합니다.
//! 호출 한 번에 POST 한 번이며 재시도하지 않습니다.
use std::sync::Arc;

use log::{debug, warn};
use secrecy::ExposeSecret;
use tokio_util::sync::CancellationToken;

use crate::core::{AppResult, CredentialError};
use crate::domain::dto::tokens::AccessTokenResponse;
use crate::domain::models::grant::{GrantType, TokenGrant};
use crate::domain::models::identity::ClientIdentity;
use crate::domain::models::scope::ScopeSet;
use crate::domain::models::token::SignedAssertion;
use crate::transport::{HttpTransport, PostRequest, send_with_cancel};

/// 토큰 엔드포인트 클라이언트
///
/// ## 요청 형식
///
/// ```text
/// POST {token_endpoint}
/// Accept: application/json
/// Authorization: Basic base64(client_id:client_secret)
/// Content-Type: application/x-www-form-urlencoded
///
/// grant_type=...&scope=...[&assertion=...]
/// ```
///
/// ## 결과
///
/// | 응답 | 결과 |
/// |------|------|
/// | 2xx + 올바른 JSON | `Ok(AccessTokenResponse)` |
/// | 2xx + 형식 불일치 | `CredentialError::MalformedResponse` |
/// | 비 2xx | `CredentialError::TokenExchange` (본문 원문 보존) |
/// | 전송 실패 / 타임아웃 | `CredentialError::Transport` |
/// | 취소 | `CredentialError::Cancelled` |
#[derive(Clone)]
pub struct TokenExchangeClient {
    transport: Arc<dyn HttpTransport>,
    token_endpoint: String,
}

impl TokenExchangeClient {
    pub fn new(transport: Arc<dyn HttpTransport>, token_endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            token_endpoint: token_endpoint.into(),
        }
    }

    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }

    /// grant로 액세스 토큰을 교환합니다.
    pub async fn exchange(
        &self,
        identity: &ClientIdentity,
        grant: TokenGrant,
        scopes: &ScopeSet,
        cancel: &CancellationToken,
    ) -> AppResult<AccessTokenResponse> {
        let scope = scopes.to_wire();
        let mut form = vec![("grant_type", grant.grant_type().as_str()), ("scope", scope.as_str())];
        if let Some(assertion) = grant.assertion() {
            form.push(("assertion", assertion.as_str()));
        }

        let body = serde_urlencoded::to_string(&form)
            .map_err(|e| CredentialError::ProtocolMisuse(format!("failed to encode token request: {}", e)))?;

        let request = PostRequest::new(&self.token_endpoint)
            .header("Accept", "application/json")
            .header("Authorization", identity.basic_authorization().expose_secret())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);

        debug!(
            "토큰 교환 요청: grant_type={}, scope={}, client_id={}",
            grant.grant_type().as_str(),
            scope,
            identity.client_id
        );

        let response = send_with_cancel(self.transport.as_ref(), request, cancel).await?;

        if !response.is_success() {
            warn!("토큰 엔드포인트 거절: status={}, body={}", response.status, response.body);
            return Err(CredentialError::TokenExchange {
                status: response.status,
                raw_body: response.body,
            });
        }

        serde_json::from_str::<AccessTokenResponse>(&response.body).map_err(|e| {
            warn!("토큰 응답 파싱 실패: {} (body: {})", e, response.body);
            CredentialError::MalformedResponse {
                raw_body: response.body.clone(),
                reason: e.to_string(),
            }
        })
    }

    /// grant type과 assertion을 따로 받는 형태
    ///
    /// 조합이 맞지 않으면 요청을 보내기 전에 `CredentialError::ProtocolMisuse`를 반환합니다.
    pub async fn exchange_with(
        &self,
        identity: &ClientIdentity,
        grant_type: GrantType,
        scopes: &ScopeSet,
        assertion: Option<SignedAssertion>,
        cancel: &CancellationToken,
    ) -> AppResult<AccessTokenResponse> {
        let grant = TokenGrant::from_parts(grant_type, assertion)?;
        self.exchange(identity, grant, scopes, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RawResponse;
    use crate::transport::mock::MockTransport;
    use std::time::Duration;

    const TOKEN_URL: &str = "https://auth.example.com/authentication/v2/token";
    const TOKEN_BODY: &str = r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#;

    fn client(transport: &Arc<MockTransport>) -> TokenExchangeClient {
        TokenExchangeClient::new(transport.clone(), TOKEN_URL)
    }

    fn identity() -> ClientIdentity {
        ClientIdentity::new("my-client", "my-secret")
    }

    fn scopes() -> ScopeSet {
        ScopeSet::parse("data:read data:write").unwrap()
    }

    #[tokio::test]
    async fn test_success_body_is_parsed_exactly() {
        let transport = Arc::new(MockTransport::with_response(200, TOKEN_BODY));
        let token = client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.scope, None);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_client_credentials_request_shape() {
        let transport = Arc::new(MockTransport::with_response(200, TOKEN_BODY));
        client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &CancellationToken::new())
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, TOKEN_URL);
        assert_eq!(request.header_value("Accept"), Some("application/json"));
        assert_eq!(request.header_value("Authorization"), Some("Basic bXktY2xpZW50Om15LXNlY3JldA=="));
        assert_eq!(
            request.header_value("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.body, "grant_type=client_credentials&scope=data%3Aread+data%3Awrite");
    }

    #[tokio::test]
    async fn test_jwt_bearer_carries_assertion() {
        let transport = Arc::new(MockTransport::with_response(200, TOKEN_BODY));
        let grant = TokenGrant::JwtBearer(SignedAssertion::new("aaa.bbb.ccc".to_string()));
        client(&transport)
            .exchange(&identity(), grant, &scopes(), &CancellationToken::new())
            .await
            .unwrap();

        let body = transport.last_request().unwrap().body;
        assert!(body.starts_with("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer&"));
        assert!(body.ends_with("&assertion=aaa.bbb.ccc"));
    }

    #[tokio::test]
    async fn test_rejection_body_is_preserved_verbatim() {
        let body = r#"{"error":"invalid_client","error_description":"bad secret"}"#;
        let transport = Arc::new(MockTransport::with_response(401, body));

        let result = client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &CancellationToken::new())
            .await;

        match result {
            Err(CredentialError::TokenExchange { status, raw_body }) => {
                assert_eq!(status, 401);
                assert_eq!(raw_body, body);
            }
            other => panic!("expected TokenExchange, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed_response() {
        let transport = Arc::new(MockTransport::with_response(200, r#"{"token":"abc"}"#));

        let result = client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &CancellationToken::new())
            .await;

        match result {
            Err(CredentialError::MalformedResponse { raw_body, .. }) => assert_eq!(raw_body, r#"{"token":"abc"}"#),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_inconsistent_grant_sends_nothing() {
        let transport = Arc::new(MockTransport::with_response(200, TOKEN_BODY));
        let client = client(&transport);
        let cancel = CancellationToken::new();

        let missing = client
            .exchange_with(&identity(), GrantType::JwtBearer, &scopes(), None, &cancel)
            .await;
        assert!(matches!(missing, Err(CredentialError::ProtocolMisuse(_))));

        let extra = client
            .exchange_with(
                &identity(),
                GrantType::ClientCredentials,
                &scopes(),
                Some(SignedAssertion::new("aaa.bbb.ccc".to_string())),
                &cancel,
            )
            .await;
        assert!(matches!(extra, Err(CredentialError::ProtocolMisuse(_))));

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_exchange_with_consistent_pair() {
        let transport = Arc::new(MockTransport::with_response(200, TOKEN_BODY));
        let token = client(&transport)
            .exchange_with(
                &identity(),
                GrantType::JwtBearer,
                &scopes(),
                Some(SignedAssertion::new("aaa.bbb.ccc".to_string())),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_single_attempt_on_transport_failure() {
        let transport = Arc::new(MockTransport::with_queue(vec![
            Err(CredentialError::Transport("connection reset".to_string())),
            Ok(RawResponse { status: 200, body: TOKEN_BODY.to_string() }),
        ]));

        let result = client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(CredentialError::Transport(_))));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_cancellation_while_waiting() {
        let transport = Arc::new(MockTransport::hanging());
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let result = client(&transport)
            .exchange(&identity(), TokenGrant::ClientCredentials, &scopes(), &cancel)
            .await;

        assert!(matches!(result, Err(CredentialError::Cancelled)));
    }
}

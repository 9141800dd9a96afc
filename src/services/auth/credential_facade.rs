//! 자격 증명 발급 진입점
//!
//! 두 가지 흐름을 제공합니다.
//!
//! | 메서드 | grant | 용도 |
//! |--------|-------|------|
//! | [`CredentialFacade::client_credentials_token`] | `client_credentials` | 애플리케이션 자신의 토큰 (서비스 계정 관리 등) |
//! | [`CredentialFacade::service_account_token`] | `jwt-bearer` | 서비스 계정으로 동작하는 토큰 |
//!
//! 매 호출마다 새로 교환하며, 토큰이나 assertion을 보관하지 않습니다.
use std::sync::Arc;

use log::info;
use tokio_util::sync::CancellationToken;

use crate::core::{AppResult, Clock};
use crate::domain::dto::tokens::AccessTokenResponse;
use crate::domain::models::grant::TokenGrant;
use crate::domain::models::identity::{ClientIdentity, ServiceAccountIdentity};
use crate::domain::models::scope::ScopeSet;
use crate::services::auth::assertion_signer::AssertionSigner;
use crate::services::auth::token_exchange_client::TokenExchangeClient;

#[derive(Clone)]
pub struct CredentialFacade {
    signer: AssertionSigner,
    exchange: TokenExchangeClient,
    clock: Arc<dyn Clock>,
}

impl CredentialFacade {
    /// assertion의 `aud`는 교환 클라이언트의 토큰 엔드포인트로 맞춰집니다.
    pub fn new(exchange: TokenExchangeClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            signer: AssertionSigner::new(exchange.token_endpoint()),
            exchange,
            clock,
        }
    }

    pub async fn client_credentials_token(
        &self,
        identity: &ClientIdentity,
        scopes: &ScopeSet,
        cancel: &CancellationToken,
    ) -> AppResult<AccessTokenResponse> {
        let token = self
            .exchange
            .exchange(identity, TokenGrant::ClientCredentials, scopes, cancel)
            .await?;

        info!("client_credentials 토큰 발급 (client_id: {}, expires_in: {})", identity.client_id, token.expires_in);
        Ok(token)
    }

    /// 서비스 계정 assertion을 서명한 뒤 `jwt-bearer` grant로 교환합니다.
    ///
    /// 서명이 실패하면 네트워크 요청은 보내지 않습니다.
    pub async fn service_account_token(
        &self,
        identity: &ClientIdentity,
        service_account: &ServiceAccountIdentity,
        scopes: &ScopeSet,
        cancel: &CancellationToken,
    ) -> AppResult<AccessTokenResponse> {
        let assertion = self
            .signer
            .sign(service_account, &identity.client_id, scopes, self.clock.as_ref())?;

        let token = self
            .exchange
            .exchange(identity, TokenGrant::JwtBearer(assertion), scopes, cancel)
            .await?;

        info!(
            "서비스 계정 토큰 발급 (service_account_id: {}, expires_in: {})",
            service_account.service_account_id, token.expires_in
        );
        Ok(token)
    }
}

//! 핸들러가 공유하는 애플리케이션 상태
use std::sync::Arc;

use log::info;
use tokio_util::sync::CancellationToken;

use crate::config::ApsConfig;
use crate::core::{AppResult, SystemClock};
use crate::domain::models::identity::{ClientIdentity, ServiceAccountIdentity};
use crate::domain::models::scope::ScopeSet;
use crate::services::auth::{CredentialFacade, TokenExchangeClient};
use crate::transport::{HttpTransport, ReqwestTransport};

/// `web::Data<AppState>`로 모든 워커에 공유되는 상태
///
/// 자격 증명은 시작 시 한 번 읽어 두고, 토큰은 요청마다 새로 교환합니다.
pub struct AppState {
    pub facade: CredentialFacade,
    pub client: ClientIdentity,
    pub service_account: ServiceAccountIdentity,
    pub scopes: ScopeSet,
    /// 서버 종료 시 진행 중인 토큰 요청을 취소합니다.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(
        facade: CredentialFacade,
        client: ClientIdentity,
        service_account: ServiceAccountIdentity,
        scopes: ScopeSet,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            facade,
            client,
            service_account,
            scopes,
            shutdown,
        }
    }

    /// 환경 변수로부터 상태를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Config` - 필수 환경 변수가 없거나 값이 잘못된 경우
    /// * `CredentialError::Signing` - `APS_SA_PRIVATE_KEY`를 해석할 수 없는 경우
    pub fn from_env(shutdown: CancellationToken) -> AppResult<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(ApsConfig::http_timeout()?)?);
        let token_url = ApsConfig::token_url();
        let facade = CredentialFacade::new(
            TokenExchangeClient::new(transport, token_url.clone()),
            Arc::new(SystemClock),
        );

        let client = ApsConfig::client_identity()?;
        let service_account = ApsConfig::service_account_identity()?;
        let scopes = ApsConfig::token_scopes()?;

        info!(
            "토큰 엔드포인트: {}, 서비스 계정: {}, 스코프: {}",
            token_url, service_account.service_account_id, scopes
        );

        Ok(Self::new(facade, client, service_account, scopes, shutdown))
    }
}

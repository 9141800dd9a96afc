//! # APS Authentication Configuration
//!
//! 인증 서버 엔드포인트와 애플리케이션/서비스 계정 자격 증명을 환경 변수에서 읽습니다.
//!
//! ## 환경 변수
//!
//! | 변수 | 필수 | 기본값 |
//! |------|------|--------|
//! | `APS_CLIENT_ID` | O | |
//! | `APS_CLIENT_SECRET` | O | |
//! | `APS_SA_ID` | 서버 | |
//! | `APS_SA_KEY_ID` | 서버 | |
//! | `APS_SA_PRIVATE_KEY` | 서버 | PEM 또는 base64 PEM |
//! | `APS_TOKEN_URL` | | `https://developer.api.autodesk.com/authentication/v2/token` |
//! | `APS_SERVICE_ACCOUNTS_URL` | | `https://developer.api.autodesk.com/authentication/v2/service-accounts` |
//! | `APS_TOKEN_SCOPES` | | `data:read` |
//! | `APS_HTTP_TIMEOUT_SECS` | | `30` |
//!
//! `APS_SA_*` 값은 `create_service_account` 도구가 출력한 값을 그대로 `.env`에 붙여 넣으면 됩니다.
//!
//! ```rust,ignore
//! use aps_auth_service::config::ApsConfig;
//!
//! let client = ApsConfig::client_identity()?;
//! let account = ApsConfig::service_account_identity()?;
//! let scopes = ApsConfig::token_scopes()?;
//! ```

use std::env;
use std::time::Duration;

use crate::core::{AppResult, CredentialError};
use crate::domain::models::identity::{ClientIdentity, ServiceAccountIdentity};
use crate::domain::models::scope::ScopeSet;

pub const DEFAULT_TOKEN_URL: &str = "https://developer.api.autodesk.com/authentication/v2/token";
pub const DEFAULT_SERVICE_ACCOUNTS_URL: &str =
    "https://developer.api.autodesk.com/authentication/v2/service-accounts";
pub const DEFAULT_TOKEN_SCOPES: &str = "data:read";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub struct ApsConfig;

impl ApsConfig {
    pub fn client_id() -> AppResult<String> {
        required("APS_CLIENT_ID", env::var("APS_CLIENT_ID").ok())
    }

    pub fn client_secret() -> AppResult<String> {
        required("APS_CLIENT_SECRET", env::var("APS_CLIENT_SECRET").ok())
    }

    pub fn client_identity() -> AppResult<ClientIdentity> {
        Ok(ClientIdentity::new(Self::client_id()?, Self::client_secret()?))
    }

    /// `APS_SA_ID`, `APS_SA_KEY_ID`, `APS_SA_PRIVATE_KEY`로 서비스 계정 identity를 만듭니다.
    pub fn service_account_identity() -> AppResult<ServiceAccountIdentity> {
        let service_account_id = required("APS_SA_ID", env::var("APS_SA_ID").ok())?;
        let key_id = required("APS_SA_KEY_ID", env::var("APS_SA_KEY_ID").ok())?;
        let private_key = required("APS_SA_PRIVATE_KEY", env::var("APS_SA_PRIVATE_KEY").ok())?;

        ServiceAccountIdentity::from_encoded_key(service_account_id, key_id, &private_key)
    }

    pub fn token_url() -> String {
        env::var("APS_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
    }

    pub fn service_accounts_url() -> String {
        env::var("APS_SERVICE_ACCOUNTS_URL").unwrap_or_else(|_| DEFAULT_SERVICE_ACCOUNTS_URL.to_string())
    }

    /// `/token` 엔드포인트가 요청하는 스코프
    pub fn token_scopes() -> AppResult<ScopeSet> {
        parse_scopes(env::var("APS_TOKEN_SCOPES").ok())
    }

    pub fn http_timeout() -> AppResult<Duration> {
        parse_timeout(env::var("APS_HTTP_TIMEOUT_SECS").ok())
    }
}

fn required(name: &str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CredentialError::Config(format!("{} must be set", name))),
    }
}

fn parse_scopes(value: Option<String>) -> AppResult<ScopeSet> {
    let raw = value.unwrap_or_else(|| DEFAULT_TOKEN_SCOPES.to_string());
    ScopeSet::parse(&raw).map_err(|e| CredentialError::Config(format!("APS_TOKEN_SCOPES: {}", e)))
}

fn parse_timeout(value: Option<String>) -> AppResult<Duration> {
    let Some(raw) = value else {
        return Ok(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(CredentialError::Config(format!(
            "APS_HTTP_TIMEOUT_SECS must be a positive integer, got {:?}",
            raw
        ))),
    }
}

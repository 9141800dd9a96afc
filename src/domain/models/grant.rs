//! OAuth2 grant type
//!
//! `client_credentials`는 assertion을 갖지 않고 `jwt-bearer`는 항상 갖습니다.
//! [`TokenGrant`]는 이 조합을 타입으로 강제합니다.
use crate::core::{AppResult, CredentialError};
use crate::domain::models::token::token::SignedAssertion;

/// 와이어 상의 grant type 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    ClientCredentials,
    JwtBearer,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::ClientCredentials => "client_credentials",
            GrantType::JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",
        }
    }
}

/// assertion까지 포함한 grant
#[derive(Debug)]
pub enum TokenGrant {
    /// 애플리케이션 자신의 자격 증명으로 토큰 발급 (2-legged)
    ClientCredentials,
    /// 서비스 계정 assertion으로 토큰 발급
    JwtBearer(SignedAssertion),
}

impl TokenGrant {
    /// grant type과 선택적 assertion으로부터 grant를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `CredentialError::ProtocolMisuse` - `ClientCredentials`에 assertion이 주어졌거나
    ///   `JwtBearer`에 assertion이 없는 경우
    pub fn from_parts(grant_type: GrantType, assertion: Option<SignedAssertion>) -> AppResult<Self> {
        match (grant_type, assertion) {
            (GrantType::ClientCredentials, None) => Ok(TokenGrant::ClientCredentials),
            (GrantType::JwtBearer, Some(assertion)) => Ok(TokenGrant::JwtBearer(assertion)),
            (GrantType::ClientCredentials, Some(_)) => Err(CredentialError::ProtocolMisuse(
                "client_credentials grant must not carry an assertion".to_string(),
            )),
            (GrantType::JwtBearer, None) => Err(CredentialError::ProtocolMisuse(
                "jwt-bearer grant requires an assertion".to_string(),
            )),
        }
    }

    pub fn grant_type(&self) -> GrantType {
        match self {
            TokenGrant::ClientCredentials => GrantType::ClientCredentials,
            TokenGrant::JwtBearer(_) => GrantType::JwtBearer,
        }
    }

    pub fn assertion(&self) -> Option<&SignedAssertion> {
        match self {
            TokenGrant::ClientCredentials => None,
            TokenGrant::JwtBearer(assertion) => Some(assertion),
        }
    }
}

//! JWT bearer assertion 서명
//!
//! 서비스 계정 개인키로 RS256 assertion을 만듭니다. 네트워크 I/O가 없고,
//! 시계를 제외하면 입력만으로 결과가 결정됩니다.
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::debug;
use rsa::RsaPrivateKey;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey, LineEnding};
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use secrecy::ExposeSecret;

use crate::core::{AppResult, Clock, CredentialError};
use crate::domain::models::identity::ServiceAccountIdentity;
use crate::domain::models::scope::ScopeSet;
use crate::domain::models::token::{AssertionClaims, SignedAssertion};

/// 허용하는 최소 RSA 모듈러스 크기 (바이트, 2048비트)
const MIN_RSA_KEY_BYTES: usize = 256;

/// RS256 JWT bearer assertion 서명기
///
/// `aud` 클레임에 들어갈 토큰 엔드포인트 URL만 상태로 가집니다.
///
/// ## 생성되는 JWT
///
/// ```text
/// Header:  { "alg": "RS256", "typ": "JWT", "kid": <key_id> }
/// Payload: { "iss": <client_id>, "sub": <service_account_id>, "aud": <token endpoint>,
///            "iat": now, "exp": now + 300, "scope": ["data:read", ...] }
/// ```
#[derive(Debug, Clone)]
pub struct AssertionSigner {
    audience: String,
}

impl AssertionSigner {
    pub fn new(token_endpoint: impl Into<String>) -> Self {
        Self {
            audience: token_endpoint.into(),
        }
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// 서비스 계정 identity로 assertion을 서명합니다.
    ///
    /// # 인자
    ///
    /// * `identity` - 서명 키와 `kid`, `sub`를 제공하는 서비스 계정
    /// * `issuer_client_id` - `iss` 클레임 (클라이언트 애플리케이션 ID)
    /// * `scopes` - `scope` 클레임
    /// * `clock` - `iat`/`exp` 기준 시각
    ///
    /// # Errors
    ///
    /// * `CredentialError::Signing` - PEM이 아니거나 RSA 키가 아니거나 2048비트 미만인 경우
    pub fn sign(
        &self,
        identity: &ServiceAccountIdentity,
        issuer_client_id: &str,
        scopes: &ScopeSet,
        clock: &dyn Clock,
    ) -> AppResult<SignedAssertion> {
        let encoding_key = load_encoding_key(identity.private_key().expose_secret())?;

        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(identity.key_id.clone());

        let claims = AssertionClaims::new(
            issuer_client_id,
            &identity.service_account_id,
            &self.audience,
            scopes,
            clock.now(),
        );

        let jwt = encode(&header, &claims, &encoding_key)
            .map_err(|e| CredentialError::Signing(format!("failed to sign assertion: {}", e)))?;

        debug!(
            "서비스 계정 assertion 서명 완료 (sub: {}, kid: {}, exp: {})",
            claims.sub, identity.key_id, claims.exp
        );

        Ok(SignedAssertion::new(jwt))
    }
}

/// PKCS#1 또는 PKCS#8 PEM을 RS256 서명 키로 변환합니다.
fn load_encoding_key(pem: &str) -> AppResult<EncodingKey> {
    let private_key = RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|_| CredentialError::Signing("private key is not a PEM-encoded RSA key".to_string()))?;

    if private_key.size() < MIN_RSA_KEY_BYTES {
        return Err(CredentialError::Signing(format!(
            "RSA key must be at least 2048 bits, got {}",
            private_key.size() * 8
        )));
    }

    let pkcs1_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CredentialError::Signing(format!("failed to encode RSA key: {}", e)))?;

    EncodingKey::from_rsa_pem(pkcs1_pem.as_bytes())
        .map_err(|e| CredentialError::Signing(format!("invalid RSA signing key: {}", e)))
}

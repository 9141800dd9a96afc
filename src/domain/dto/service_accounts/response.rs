//! 서비스 계정 API 응답 DTO
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::domain::models::identity::ServiceAccountIdentity;

/// 생성된 서비스 계정
///
/// `email`은 서비스 계정이 동작하기 전에 프로젝트에 초대되어야 하는 주소입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountRecord {
    pub service_account_id: String,
    pub email: String,
}

/// 생성된 서비스 계정 키
///
/// 개인키를 확인할 수 있는 유일한 시점입니다. 다시 조회할 수 없으므로
/// 호출자가 받은 즉시 안전한 곳에 저장해야 합니다.
#[derive(Debug, Deserialize)]
#[serde(from = "ServiceAccountKeyWire")]
pub struct ServiceAccountKeyRecord {
    pub key_id: String,
    pub private_key: SecretString,
}

impl ServiceAccountKeyRecord {
    /// 이 키로 서명하는 서비스 계정 identity를 만듭니다.
    pub fn into_identity(self, service_account_id: impl Into<String>) -> ServiceAccountIdentity {
        use secrecy::ExposeSecret;

        ServiceAccountIdentity::new(service_account_id, self.key_id, self.private_key.expose_secret())
    }
}

/// 키 생성 API의 와이어 형식 (`{"kid": "...", "privateKey": "..."}`)
#[derive(Deserialize)]
struct ServiceAccountKeyWire {
    kid: String,
    #[serde(rename = "privateKey")]
    private_key: String,
}

impl From<ServiceAccountKeyWire> for ServiceAccountKeyRecord {
    fn from(wire: ServiceAccountKeyWire) -> Self {
        Self {
            key_id: wire.kid,
            private_key: SecretString::from(wire.private_key),
        }
    }
}

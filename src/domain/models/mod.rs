//! # Domain Models Module
//!
//! 자격 증명 발급에 쓰이는 값 객체들을 정의합니다.
//! 모든 모델은 생성 후 변경되지 않으며, 비밀 값은 `Debug` 출력에서 가려집니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── identity.rs   ← ClientIdentity, ServiceAccountIdentity
//! ├── scope.rs      ← ScopeSet (비어 있지 않은 스코프 집합)
//! ├── grant.rs      ← GrantType, TokenGrant (grant/assertion 조합 강제)
//! └── token/        ← AssertionClaims, SignedAssertion
//! ```
//!
//! ## 불변 조건
//!
//! - `ScopeSet`은 절대 비어 있지 않습니다.
//! - assertion의 `exp - iat`는 항상 300초입니다.
//! - `client_credentials` grant는 assertion을 갖지 않고, `jwt-bearer` grant는 항상 갖습니다.
//!
//! ```rust,ignore
//! use aps_auth_service::domain::{ClientIdentity, ScopeSet, ServiceAccountIdentity};
//!
//! let client = ClientIdentity::new("client-id", "client-secret");
//! let account = ServiceAccountIdentity::from_encoded_key("sa-id", "key-id", &encoded_pem)?;
//! let scopes: ScopeSet = "data:read".parse()?;
//! ```

pub mod identity;
pub mod scope;
pub mod grant;
pub mod token;

pub use identity::*;
pub use scope::*;
pub use grant::*;
pub use token::*;

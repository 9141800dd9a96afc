//! # Domain Layer Module
//!
//! 자격 증명 발급에 쓰이는 값 타입과 외부 API 계약을 정의합니다.
//! 이 계층은 네트워크나 환경 변수에 의존하지 않습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 자격 증명, 스코프, grant, assertion
//! └── DTOs    - 토큰/서비스 계정 API 요청·응답 본문
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Transport (HTTP)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`models`]
//!
//! | 타입 | 설명 |
//! |------|------|
//! | `ClientIdentity` | client ID + client secret |
//! | `ServiceAccountIdentity` | 서비스 계정 ID + key ID + RSA 개인키 |
//! | `ScopeSet` | 비어 있지 않은 스코프 집합 |
//! | `GrantType` / `TokenGrant` | `client_credentials` / `jwt-bearer` |
//! | `AssertionClaims` / `SignedAssertion` | JWT bearer assertion |
//!
//! ### [`dto`]
//!
//! | 타입 | 설명 |
//! |------|------|
//! | `AccessTokenResponse` | 토큰 엔드포인트 응답 |
//! | `CreateServiceAccountRequest` | 서비스 계정 생성 요청 (이름 5-64자) |
//! | `ServiceAccountRecord` | 생성된 계정 (ID, 초대할 이메일) |
//! | `ServiceAccountKeyRecord` | 생성된 키 (key ID, 개인키) |
//!
//! ## 비밀 값 취급
//!
//! client secret, 개인키, 서명된 assertion, 액세스 토큰은 모두 `Debug` 출력에서
//! 값이 가려집니다. 로그에 구조체를 그대로 찍어도 비밀 값이 남지 않습니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;

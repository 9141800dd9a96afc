//! # Data Transfer Objects
//!
//! 외부 인증 서버와 주고받는 JSON 본문 타입들입니다.
//!
//! | 모듈 | 방향 | 내용 |
//! |------|------|------|
//! | [`tokens`] | 응답 | 토큰 엔드포인트 응답 (`access_token`, `expires_in` 등) |
//! | [`service_accounts`] | 요청/응답 | 서비스 계정 생성 요청, 계정/키 레코드 |
//!
//! 토큰 엔드포인트는 snake_case, 서비스 계정 API는 camelCase 필드를 사용합니다.

pub mod tokens;
pub mod service_accounts;

pub use tokens::*;
pub use service_accounts::*;

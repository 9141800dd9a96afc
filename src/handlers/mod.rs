//! # HTTP Handlers
//!
//! | 경로 | 핸들러 | 설명 |
//! |------|--------|------|
//! | `GET /token` | [`token::issue_token`] | 서비스 계정 액세스 토큰 발급 |
//! | `GET /health` | [`health::health_check`] | 헬스체크 |
//!
//! 핸들러는 [`state::AppState`]를 `web::Data`로 받아 서비스 계층에 위임하고,
//! 에러는 `CredentialError`의 `ResponseError` 구현으로 JSON 응답이 됩니다.

pub mod health;
pub mod state;
pub mod token;

pub use state::AppState;

//! # Core Module
//!
//! 서브시스템 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! - [`errors`] - `CredentialError` 에러 분류와 `AppResult` 별칭
//! - [`clock`] - 주입 가능한 시계 (assertion 만료 시각 계산용)

pub mod errors;
pub mod clock;

pub use errors::*;
pub use clock::*;

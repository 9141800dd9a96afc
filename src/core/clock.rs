//! 주입 가능한 시계
//!
//! assertion의 `iat`/`exp`는 전역 시계를 직접 읽지 않고 이 trait을 통해 얻습니다.
//! 테스트에서는 [`FixedClock`]으로 만료 경계를 결정적으로 검증할 수 있습니다.

use chrono::Utc;

/// Unix timestamp(초)를 제공하는 시계
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// 시스템 시계 (`chrono::Utc::now`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 항상 같은 시각을 반환하는 시계
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

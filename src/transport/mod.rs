//! # HTTP Transport
//!
//! 서비스 계층과 실제 HTTP 클라이언트 사이의 경계입니다.
//! 서비스는 [`HttpTransport`] trait만 알고, 운영 환경에서는 [`ReqwestTransport`],
//! 테스트에서는 메모리 내 mock이 주입됩니다.
//!
//! | 타입 | 역할 |
//! |------|------|
//! | [`PostRequest`] | URL, 헤더, 본문 (한 번의 POST) |
//! | [`RawResponse`] | 상태 코드와 원문 본문 |
//! | [`send_with_cancel`] | 취소 토큰과 전송을 경쟁시키는 헬퍼 |
//!
//! 상태 코드 해석과 본문 파싱은 호출하는 서비스가 담당합니다.
//! transport는 "응답을 받았는가"만 판단합니다.

pub mod http_transport;
pub mod reqwest_transport;

#[cfg(test)]
pub(crate) mod mock;

pub use http_transport::*;
pub use reqwest_transport::*;

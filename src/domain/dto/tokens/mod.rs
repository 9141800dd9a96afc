//! 토큰 엔드포인트 DTO

pub mod response;

pub use response::*;

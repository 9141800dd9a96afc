//! # Configuration
//!
//! 모든 설정은 환경 변수에서 읽습니다. 바이너리는 시작 시 [`load_env_file`]로
//! `PROFILE`에 맞는 `.env` 파일을 먼저 로드합니다.
//!
//! | 구조체 | 내용 |
//! |--------|------|
//! | [`ApsConfig`] | 인증 서버 URL, 클라이언트/서비스 계정 자격 증명, 스코프, 타임아웃 |
//! | [`ServerConfig`] | HTTP 서버 바인드 주소 |

pub mod aps_config;
pub mod server_config;

pub use aps_config::*;
pub use server_config::*;

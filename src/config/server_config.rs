//! 서버 및 실행 환경 설정 관리 모듈
//!
//! `.env` 파일 로드와 HTTP 서버 바인드 주소를 관리합니다.

use std::env;

use dotenv::dotenv;
use log::{error, info};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        parse_port(env::var("PORT").ok())
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

fn parse_port(value: Option<String>) -> u16 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

/// `PROFILE`에 따라 `.env.prod`, `.env.dev` 또는 `.env`를 로드합니다.
///
/// 파일이 없어도 실패하지 않습니다. 이미 설정된 환경 변수가 우선합니다.
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(_) => {
                dotenv().ok();
                info!(".env.dev 없음, 기본 .env 파일 로드");
            }
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_parsing() {
        assert_eq!(parse_port(None), 3000);
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
        assert_eq!(parse_port(Some("not-a-port".to_string())), 3000);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}

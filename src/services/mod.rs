//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 상태가 없고 `Send + Sync`이므로 `Arc`로 공유해 동시에 호출할 수 있습니다.
//! HTTP 전송은 [`crate::transport::HttpTransport`]로 주입받습니다.
//!
//! # Features
//!
//! - RS256 JWT bearer assertion 서명
//! - OAuth2 토큰 교환 (`client_credentials`, `jwt-bearer`)
//! - 서비스 계정 및 키 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use aps_auth_service::core::SystemClock;
//! use aps_auth_service::services::auth::{CredentialFacade, TokenExchangeClient};
//! use aps_auth_service::transport::ReqwestTransport;
//!
//! let transport = Arc::new(ReqwestTransport::new(Duration::from_secs(30))?);
//! let exchange = TokenExchangeClient::new(transport, token_url);
//! let facade = CredentialFacade::new(exchange, Arc::new(SystemClock));
//!
//! let token = facade.service_account_token(&client, &account, &scopes, &cancel).await?;
//! ```

pub mod auth;
pub mod service_accounts;

//! APS 인증 서비스
//!
//! Autodesk Platform Services(APS) 인증 서버에 대한 자격 증명 발급 서브시스템입니다.
//! 애플리케이션 자격 증명과 서비스 계정 키로 OAuth2 액세스 토큰을 발급받고,
//! 서비스 계정과 키 쌍을 새로 만들 수 있습니다.
//!
//! # Features
//!
//! - **client_credentials**: 애플리케이션 자신의 2-legged 토큰
//! - **jwt-bearer**: RS256으로 서명한 assertion을 서비스 계정 토큰으로 교환
//! - **프로비저닝**: 서비스 계정 생성, 서비스 계정 키 생성
//! - **취소**: 모든 네트워크 작업은 호출자의 `CancellationToken`으로 중단 가능
//!
//! 토큰은 캐시하지 않습니다. 호출할 때마다 새로 교환합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← GET /token, GET /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← AppState (web::Data)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CredentialFacade, AssertionSigner,
//! │                 │   TokenExchangeClient, ServiceAccountProvisioner
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Transport    │ ← HttpTransport (reqwest)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ APS 인증 서버    │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use aps_auth_service::config::ApsConfig;
//! use aps_auth_service::handlers::AppState;
//! use tokio_util::sync::CancellationToken;
//!
//! let state = AppState::from_env(CancellationToken::new())?;
//! let token = state
//!     .facade
//!     .service_account_token(&state.client, &state.service_account, &state.scopes, &state.shutdown)
//!     .await?;
//! println!("expires in {}s", token.expires_in);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod transport;
pub mod services;
pub mod routes;
pub mod handlers;

//! 토큰 발급 서비스
//!
//! ```text
//! CredentialFacade
//!   ├── AssertionSigner       (jwt-bearer 전용, 네트워크 없음)
//!   └── TokenExchangeClient ──▶ HttpTransport ──▶ 토큰 엔드포인트
//! ```

pub mod assertion_signer;
pub mod token_exchange_client;
pub mod credential_facade;

pub use assertion_signer::*;
pub use token_exchange_client::*;
pub use credential_facade::*;

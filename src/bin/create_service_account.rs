//! 서비스 계정 생성 도구
//!
//! 애플리케이션 자격 증명(`APS_CLIENT_ID`, `APS_CLIENT_SECRET`)으로 서비스 계정과
//! 키를 만들고, 서버 `.env`에 넣을 값을 출력합니다.
//!
//! ```bash
//! cargo run --bin create_service_account -- test-robot Rob Robot
//! ```
//!
//! 실행할 때마다 새 계정이 만들어집니다. 실패 후 다시 실행하기 전에 이전 실행에서
//! 계정이 이미 생성되었는지 확인하세요.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use secrecy::ExposeSecret;
use tokio_util::sync::CancellationToken;

use aps_auth_service::config::{ApsConfig, load_env_file};
use aps_auth_service::core::{AppResult, SystemClock};
use aps_auth_service::domain::{ScopeSet, encode_private_key_for_env};
use aps_auth_service::services::auth::{CredentialFacade, TokenExchangeClient};
use aps_auth_service::services::service_accounts::ServiceAccountProvisioner;
use aps_auth_service::transport::{HttpTransport, ReqwestTransport};

const PROVISIONING_SCOPES: &str = "application:service_account:write application:service_account_key:write";

/// Create an APS service account and a private key for it
#[derive(Parser, Debug)]
#[command(name = "create_service_account")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Service account name (5-64 characters)
    user_name: String,

    /// First name of the service account
    first_name: String,

    /// Last name of the service account
    last_name: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 중단 요청 수신, 진행 중인 요청 취소");
            trigger.cancel();
        }
    });

    match run(&cli, &cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("서비스 계정 생성 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, cancel: &CancellationToken) -> AppResult<()> {
    let client = ApsConfig::client_identity()?;
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(ApsConfig::http_timeout()?)?);

    let facade = CredentialFacade::new(
        TokenExchangeClient::new(transport.clone(), ApsConfig::token_url()),
        Arc::new(SystemClock),
    );
    let provisioner = ServiceAccountProvisioner::new(transport, ApsConfig::service_accounts_url());

    let scopes = ScopeSet::parse(PROVISIONING_SCOPES)?;
    let credentials = facade.client_credentials_token(&client, &scopes, cancel).await?;

    let account = provisioner
        .create_service_account(
            &cli.user_name,
            &cli.first_name,
            &cli.last_name,
            &credentials.access_token,
            cancel,
        )
        .await?;

    let key = provisioner
        .create_key(&account.service_account_id, &credentials.access_token, cancel)
        .await?;

    println!("Service account created successfully!");
    println!("Invite the following user to your project: {}", account.email);
    println!("Include the following environment variables to your application:");
    println!("APS_SA_ID=\"{}\"", account.service_account_id);
    println!("APS_SA_EMAIL=\"{}\"", account.email);
    println!("APS_SA_KEY_ID=\"{}\"", key.key_id);
    println!("APS_SA_PRIVATE_KEY=\"{}\"", encode_private_key_for_env(key.private_key.expose_secret()));

    Ok(())
}

//! APS 서비스 계정 토큰 서버
//!
//! 설정된 서비스 계정으로 액세스 토큰을 발급하는 HTTP 서버입니다.
//!
//! ```bash
//! PROFILE=dev cargo run --bin aps_auth_service
//! curl http://127.0.0.1:3000/token
//! ```

use std::process::ExitCode;

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::{error, info};
use tokio_util::sync::CancellationToken;

use aps_auth_service::config::{ServerConfig, load_env_file};
use aps_auth_service::handlers::AppState;
use aps_auth_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> ExitCode {
    load_env_file();
    init_logging();

    info!("🚀 APS 인증 서비스 시작중...");

    let shutdown = CancellationToken::new();
    let state = match AppState::from_env(shutdown.clone()) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("✅ 서비스 초기화 완료");

    let result = start_http_server(state, shutdown.clone()).await;
    shutdown.cancel();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("서버 실행 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn start_http_server(state: web::Data<AppState>, shutdown: CancellationToken) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Token: http://{}/token", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run();

    // 종료 신호를 받으면 진행 중인 업스트림 요청을 먼저 취소한다
    let handle = server.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 종료 신호 수신, 진행 중인 토큰 요청 취소");
            shutdown.cancel();
            handle.stop(true).await;
        }
    });

    server.await
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

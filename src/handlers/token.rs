//! 토큰 발급 핸들러
use actix_web::{HttpResponse, get, web};
use log::error;

use crate::core::CredentialError;
use crate::handlers::state::AppState;

/// 서비스 계정 액세스 토큰 발급
///
/// 설정된 서비스 계정으로 `jwt-bearer` 교환을 수행하고, 토큰 엔드포인트의 응답을
/// 그대로 JSON으로 돌려줍니다. 캐시하지 않으므로 호출할 때마다 새 토큰이 발급됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://127.0.0.1:3000/token
/// ```
///
/// 성공:
/// ```json
/// { "access_token": "eyJ...", "token_type": "Bearer", "expires_in": 3599 }
/// ```
///
/// 실패 (상태 코드는 에러 종류에 따라 400/500/502/503):
/// ```json
/// { "error": "Failed to generate access token" }
/// ```
#[get("/token")]
pub async fn issue_token(state: web::Data<AppState>) -> Result<HttpResponse, CredentialError> {
    let cancel = state.shutdown.child_token();

    let token = state
        .facade
        .service_account_token(&state.client, &state.service_account, &state.scopes, &cancel)
        .await
        .map_err(|e| {
            error!("토큰 발급 실패: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(token))
}

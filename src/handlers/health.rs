//! 헬스체크 핸들러
use actix_web::{HttpResponse, get};
use serde_json::json;

/// 서비스 상태 확인
///
/// 인증 서버에 요청하지 않으므로 업스트림 장애와 무관하게 항상 200을 반환합니다.
///
/// ```json
/// {
///   "status": "ok",
///   "service": "aps_auth_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

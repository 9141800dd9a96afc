//! 라우트 설정
use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check);
    cfg.service(handlers::token::issue_token);
}

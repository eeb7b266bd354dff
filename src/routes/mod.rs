//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별 스코프로 묶어 등록합니다.
//!
//! # Route Groups
//!
//! | 스코프 | 인증 |
//! |--------|------|
//! | `/`, `/health` | 없음 |
//! | `/list`, `/note` | `AUTH_ENABLED=true`이면 필수, 아니면 선택 |
//! | `/user` | 선택 (`/me`, `DELETE`는 핸들러에서 필수) |
//! | `/auth` | 없음 (토큰 발급/검증 엔드포인트) |
//!
//! # Extractor 에러
//!
//! 잘못된 JSON 본문, UUID가 아닌 경로 세그먼트, 누락된 쿼리 파라미터는 모두
//! `{"error": "..."}` 형태의 400 응답으로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(|cfg| configure_app(cfg, &registry, &settings.auth));
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::config::AuthConfig;
use crate::core::errors::AppError;
use crate::core::registry::ServiceRegistry;
use crate::db::Database;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 앱 데이터와 모든 라우트를 한 번에 등록합니다.
pub fn configure_app(cfg: &mut web::ServiceConfig, registry: &ServiceRegistry, auth: &AuthConfig) {
    registry.register(cfg);
    configure_all_routes(cfg, auth);
}

/// 모든 라우트를 설정합니다
///
/// 고정 경로(`/all`, `/me`)는 같은 스코프의 `/{id}` 패턴보다 먼저 등록됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, auth: &AuthConfig) {
    configure_extractors(cfg);

    cfg.service(hello).service(health_check);

    configure_todo_routes(cfg, auth);
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 경로 파라미터: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터: {}", err)).into()
    }));
}

/// 목록/노트 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8000/list \
///   -H "Content-Type: application/json" \
///   -d '{"title":"Groceries"}'
///
/// curl -X POST http://localhost:8000/note \
///   -H "Content-Type: application/json" \
///   -d '{"text":"Buy milk","list_id":"<list uuid>"}'
/// ```
fn configure_todo_routes(cfg: &mut web::ServiceConfig, auth: &AuthConfig) {
    cfg.service(
        web::scope("/list")
            .wrap(AuthMiddleware::from_config(auth))
            .service(handlers::lists::get_all_lists)
            .service(handlers::lists::get_list_by_query)
            .service(handlers::lists::create_list)
            .service(handlers::lists::get_list_notes)
            .service(handlers::lists::get_list)
            .service(handlers::lists::delete_list),
    );

    cfg.service(
        web::scope("/note")
            .wrap(AuthMiddleware::from_config(auth))
            .service(handlers::notes::get_all_notes)
            .service(handlers::notes::get_note_by_query)
            .service(handlers::notes::create_note)
            .service(handlers::notes::get_note)
            .service(handlers::notes::delete_note),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .wrap(AuthMiddleware::optional())
            .service(handlers::users::create_user)
            .service(handlers::users::get_all_users)
            .service(handlers::users::get_current_user)
            .service(handlers::users::get_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::local_login)
            .service(handlers::auth::register)
            .service(handlers::auth::verify_token),
    );
}

#[get("/")]
async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello, world!" }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스 연결이 끊겨 있으면 503을 반환합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "todo_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "database": "up"
/// }
/// ```
#[get("/health")]
async fn health_check(database: web::Data<Database>) -> HttpResponse {
    let database_up = match database.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::error!("헬스체크 실패: {}", e);
            false
        }
    };

    let body = json!({
        "status": if database_up { "healthy" } else { "degraded" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": if database_up { "up" } else { "down" },
    });

    if database_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

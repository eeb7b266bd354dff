//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::AuthConfig;
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
#[derive(Debug, Clone, Copy)]
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }

    /// `AUTH_ENABLED` 설정에 따라 목록/노트 라우트용 미들웨어를 생성합니다.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(AuthMode::from_protection(config.protect_todo_routes))
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use jsonwebtoken::Algorithm;

    use crate::config::JwtConfig;
    use crate::core::registry::ServiceRegistry;
    use crate::db::Database;
    use crate::domain::dto::users::request::CreateUserRequest;
    use crate::domain::entities::users::user::User;
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};

    #[get("/whoami")]
    async fn whoami(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(AuthenticatedUser { user_id }) => HttpResponse::Ok().body(user_id.to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[get("/strict")]
    async fn strict(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    async fn registry() -> ServiceRegistry {
        let database = Database::in_memory().await.unwrap();
        ServiceRegistry::build(database, &JwtConfig::new("middleware-secret", Algorithm::HS256, 1), 4)
    }

    /// 저장된 사용자와 그 사용자의 토큰
    async fn stored_user(registry: &ServiceRegistry) -> (User, String) {
        let created = registry
            .user_service
            .create_user(CreateUserRequest {
                username: "alice".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();
        let user = registry.user_service.find_token_subject(created.id).await.unwrap();
        let token = registry.token_service.generate_access_token(&user).unwrap();

        (user, token)
    }

    #[actix_web::test]
    async fn test_from_config_selects_mode() {
        let protected = AuthConfig { protect_todo_routes: true };
        assert_eq!(AuthMiddleware::from_config(&protected).mode(), AuthMode::Required);
        assert_eq!(AuthMiddleware::from_config(&AuthConfig::default()).mode(), AuthMode::Optional);
    }

    #[actix_web::test]
    async fn test_required_mode_rejects_missing_token() {
        let registry = registry().await;
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_required_mode_accepts_bearer_and_api_key() {
        let registry = registry().await;
        let (user, token) = stored_user(&registry).await;

        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user.id.to_string().as_bytes());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("X-API-KEY", token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, user.id.to_string().as_bytes());
    }

    #[actix_web::test]
    async fn test_token_of_deleted_user_is_rejected() {
        let registry = registry().await;
        let (user, token) = stored_user(&registry).await;
        registry.user_service.delete_user(user.id).await.unwrap();

        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .service(web::scope("/required").wrap(AuthMiddleware::required()).service(whoami))
                .service(web::scope("/optional").wrap(AuthMiddleware::optional()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/required/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/optional/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous".as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_mode_passes_anonymous_requests() {
        let registry = registry().await;
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .service(web::scope("").wrap(AuthMiddleware::optional()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous".as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_mode_keeps_rejection_reason_for_strict_handlers() {
        let registry = registry().await;
        let app = test::init_service(
            App::new()
                .configure(|cfg| registry.register(cfg))
                .service(web::scope("").wrap(AuthMiddleware::optional()).service(strict)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/strict")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authentication error: 유효하지 않은 토큰입니다");
    }
}

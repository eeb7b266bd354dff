//! # Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth` | 로그인 | 200 / 401 |
//! | `POST` | `/auth/login` | 로그인 (별칭) | 200 / 401 |
//! | `POST` | `/auth/register` | 회원가입 | 201 / 400 / 409 |
//! | `POST` | `/auth/verify` | 토큰 검증 | 200 / 401 |
//!
//! 로그인 응답:
//!
//! ```json
//! { "access_token": "eyJhbGciOi...", "token_type": "bearer", "expires_in": 86400 }
//! ```

use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, LoginRequest};
use crate::services::auth::{AuthService, TokenService};

#[post("")]
pub async fn login(
    service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    issue_token(&service, payload.into_inner()).await
}

#[post("/login")]
pub async fn local_login(
    service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    issue_token(&service, payload.into_inner()).await
}

async fn issue_token(service: &AuthService, payload: LoginRequest) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = service.authenticate(payload).await?;

    Ok(HttpResponse::Ok().json(token))
}

#[post("/register")]
pub async fn register(
    service: web::Data<AuthService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[post("/verify")]
pub async fn verify_token(
    req: HttpRequest,
    service: web::Data<AuthService>,
    token_service: web::Data<TokenService>,
) -> Result<HttpResponse, AppError> {
    let token = token_service.extract_request_token(req.headers())?;
    let verified = service.verify(token).await?;

    Ok(HttpResponse::Ok().json(verified))
}

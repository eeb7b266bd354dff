//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer` 토큰 추출, 없으면 `X-API-KEY` 헤더 확인
//! - JWT 서명/만료 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/list")
//!         .wrap(AuthMiddleware::from_config(&auth_config))
//!         .service(get_all_lists)
//! );
//! ```
//!
//! 미들웨어는 앱 데이터에 등록된 `web::Data<TokenService>`를 사용합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

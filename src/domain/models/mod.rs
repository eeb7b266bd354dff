//! # Domain Models Module
//!
//! 영속되지 않는 인증 관련 도메인 모델을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`token`] - JWT 클레임 (`sub`, `user_id`, `iat`, `exp`)
//! - [`auth`] - 미들웨어가 요청 확장에 저장하는 [`AuthenticatedUser`]와 인증 모드
//!
//! ## 요청 흐름
//!
//! ```text
//! Authorization: Bearer <jwt>  (또는 X-API-KEY: <jwt>)
//!        │
//!        ▼
//! AuthMiddleware ── TokenService::verify_token ──▶ TokenClaims
//!        │
//!        ▼
//! req.extensions_mut().insert(AuthenticatedUser)
//!        │
//!        ▼
//! 핸들러 인자: AuthenticatedUser / OptionalUser
//! ```

pub mod auth;
pub mod token;

pub use auth::{AuthMode, AuthenticatedUser, OptionalUser};
pub use token::TokenClaims;

//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리하는 모듈입니다.
//! `.env.dev` / `.env.prod` / `.env` 파일은 `main`에서 `dotenv`로 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 실행 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 및 라우트 보호 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8000"
//!
//! # 데이터베이스
//! export DB_URL="sqlite://todo.sqlite?mode=rwc"
//!
//! # JWT 설정
//! export JWT_SECRET_KEY="your-super-secret-key"
//! export JWT_ALGORITHM="HS256"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! export AUTH_ENABLED="false"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::core::errors::AppResult;

/// 애플리케이션 전체 설정 묶음
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
}

impl Settings {
    /// 모든 설정을 환경 변수에서 읽어옵니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            auth: AuthConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        })
    }
}

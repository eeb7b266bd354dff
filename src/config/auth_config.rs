//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 라우트 보호 여부 등 인증 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-jwt-key"
//! export JWT_ALGORITHM="HS256"          # HS256 | HS384 | HS512
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # /list, /note 라우트에 Bearer 토큰을 요구할지 여부
//! export AUTH_ENABLED="true"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let jwt = JwtConfig::from_env()?;
//! let token_service = TokenService::new(jwt);
//! ```

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::config::data_config::env_or;
use crate::core::errors::{AppError, AppResult};

/// JWT 서명 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC 서명 비밀 키
    pub secret: String,
    /// 서명 알고리즘 (HMAC 계열만 허용)
    pub algorithm: Algorithm,
    /// 액세스 토큰 유효 시간 (시간)
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub const DEFAULT_SECRET: &'static str = "your_jwt_secret_key";

    /// 허용되는 토큰 유효 시간 (1시간 - 1년)
    pub const EXPIRATION_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

    pub fn new(secret: impl Into<String>, algorithm: Algorithm, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
            expiration_hours,
        }
    }

    /// 환경 변수에서 JWT 설정을 읽어옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - `JWT_ALGORITHM`이 HMAC 계열이 아니거나
    ///   `JWT_EXPIRATION_HOURS`가 허용 범위를 벗어난 경우
    pub fn from_env() -> AppResult<Self> {
        let secret = env::var("JWT_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET_KEY not set, using default (not secure for production!)");
            Self::DEFAULT_SECRET.to_string()
        });

        let algorithm = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());

        Ok(Self {
            secret,
            algorithm: Self::parse_algorithm(&algorithm)?,
            expiration_hours: Self::validate_expiration_hours(env_or("JWT_EXPIRATION_HOURS", 24))?,
        })
    }

    /// 0 이하의 값은 발급 즉시 만료된 토큰을, 너무 큰 값은 만료 시각 계산 오버플로를 일으킵니다.
    pub fn validate_expiration_hours(hours: i64) -> AppResult<i64> {
        if Self::EXPIRATION_HOURS_RANGE.contains(&hours) {
            Ok(hours)
        } else {
            Err(AppError::InternalError(format!(
                "JWT_EXPIRATION_HOURS는 {}-{} 사이여야 합니다: {}",
                Self::EXPIRATION_HOURS_RANGE.start(),
                Self::EXPIRATION_HOURS_RANGE.end(),
                hours
            )))
        }
    }

    /// 알고리즘 이름을 파싱합니다. 공유 비밀 키로 서명 가능한 HS256/HS384/HS512만 허용됩니다.
    pub fn parse_algorithm(name: &str) -> AppResult<Algorithm> {
        let algorithm = Algorithm::from_str(name.trim().to_uppercase().as_str())
            .map_err(|e| AppError::InternalError(format!("지원하지 않는 JWT 알고리즘 {}: {}", name, e)))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
            other => Err(AppError::InternalError(format!(
                "JWT 알고리즘 {:?}은(는) 비밀 키 서명을 지원하지 않습니다",
                other
            ))),
        }
    }

    /// 토큰 유효 시간 (초)
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours.saturating_mul(3600)
    }
}

/// 라우트 보호 설정
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// `true`이면 `/list`, `/note` 스코프에 필수 인증을 적용합니다.
    pub protect_todo_routes: bool,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            protect_todo_routes: env_or("AUTH_ENABLED", false),
        }
    }
}

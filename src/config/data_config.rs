//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 실행 환경, 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 환경 변수를 읽어 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {:?} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 실행 환경 (`ENVIRONMENT`)
///
/// bcrypt cost 기본값을 고를 때만 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 설정되지 않았으면 development로 간주합니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|name| Self::from_name(&name))
            .unwrap_or(Environment::Development)
    }

    /// 알 수 없는 이름은 가장 보수적인 production으로 취급합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    fn default_bcrypt_cost(self) -> u32 {
        match self {
            Environment::Development | Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const COST_RANGE: std::ops::RangeInclusive<u32> = 4..=15;

    /// `BCRYPT_COST`와 `ENVIRONMENT`로 bcrypt cost를 결정합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::resolve_cost(env::var("BCRYPT_COST").ok().as_deref(), Environment::current())
    }

    /// 명시된 cost가 허용 범위 안이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn resolve_cost(explicit: Option<&str>, environment: Environment) -> u32 {
        if let Some(raw) = explicit {
            match raw.trim().parse::<u32>() {
                Ok(cost) if Self::COST_RANGE.contains(&cost) => return cost,
                _ => log::warn!("BCRYPT_COST 값이 유효하지 않습니다 (4-15): {}", raw),
            }
        }

        environment.default_bcrypt_cost()
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", 8000),
            workers: env_or("WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite 연결 설정
///
/// ## 환경 변수
/// - `DB_URL`: SQLite 연결 URL (기본값: `sqlite://todo.sqlite?mode=rwc`)
/// - `DB_MAX_CONNECTIONS`: 커넥션 풀 크기 (기본값: 5)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub const DEFAULT_URL: &'static str = "sqlite://todo.sqlite?mode=rwc";

    pub fn from_env() -> Self {
        Self {
            url: env::var("DB_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string()),
            max_connections: env_or("DB_MAX_CONNECTIONS", 5),
        }
    }

    /// 테스트용 인메모리 데이터베이스 설정
    ///
    /// 인메모리 SQLite는 커넥션마다 별도의 데이터베이스가 생기므로 커넥션을 하나로 고정합니다.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

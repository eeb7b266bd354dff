//! Database Connection Management Module
//!
//! SQLite 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! sqlx 커넥션 풀을 생성하고, 시작 시 `migrations/` 디렉터리의 스키마를 적용합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # SQLite 연결 URL (mode=rwc: 파일이 없으면 생성)
//! export DB_URL="sqlite://todo.sqlite?mode=rwc"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&settings.database).await?;
//! database.migrate().await?;
//! ```

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// SQLite 데이터베이스 연결 래퍼
///
/// 커넥션 풀을 감싸며, 리포지토리 계층에서 쿼리를 실행할 때 사용합니다.
#[derive(Clone)]
pub struct Database {
    /// sqlx 커넥션 풀
    pool: SqlitePool,
}

impl Database {
    /// 새 SQLite 커넥션 풀을 생성합니다.
    ///
    /// 외래 키 제약을 항상 활성화하여 `note.list_id` 참조 무결성을 데이터베이스가 보장하도록 합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .with_context(|| format!("잘못된 DB_URL: {}", config.url))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

        if config.is_in_memory() {
            // 커넥션이 닫히면 인메모리 데이터베이스도 사라집니다
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        info!("✅ SQLite 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    /// 마이그레이션된 인메모리 데이터베이스를 생성합니다. (테스트용)
    pub async fn in_memory() -> AppResult<Self> {
        let database = Self::connect(&DatabaseConfig::in_memory()).await?;
        database.migrate().await?;
        Ok(database)
    }

    /// `migrations/` 디렉터리의 스키마를 적용합니다.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ 데이터베이스 마이그레이션 완료");
        Ok(())
    }

    /// 커넥션 풀 참조를 반환합니다.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_in_memory_database_has_schema() {
        let database = Database::in_memory().await.unwrap();

        database.ping().await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('list', 'note', 'user') ORDER BY name",
        )
        .fetch_all(database.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(names, vec!["list", "note", "user"]);
    }

    #[actix_web::test]
    async fn test_foreign_keys_enabled() {
        let database = Database::in_memory().await.unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(database.pool())
            .await
            .unwrap();

        assert_eq!(enabled, 1);
    }
}

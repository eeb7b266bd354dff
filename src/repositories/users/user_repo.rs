//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **유니크 사용자명**: `user.username` UNIQUE 제약, 위반 시 `ConflictError`(409)
//! - **해시 보관**: `password_hash` 컬럼에는 bcrypt 해시만 저장
//! - **명시적 주입**: [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 `Arc<Database>`를 전달

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::CrudRepository;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 사용자명 중복
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database.clone());
///
/// let created = repo.create(User::new_local("john_doe".into(), hash)).await?;
/// let found = repo.find_by_username("john_doe").await?;
/// let deleted = repo.delete(created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// if repo.find_by_username("new_user").await?.is_some() {
    ///     return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
    /// }
    /// ```
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM "user"
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }

    pub async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let found: i64 = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM "user" WHERE username = ?1)"#)
            .bind(username)
            .fetch_one(self.db.pool())
            .await?;

        Ok(found != 0)
    }
}

#[async_trait]
impl CrudRepository<User> for UserRepository {
    fn table_name(&self) -> &'static str {
        "user"
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM "user"
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM "user"
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(users)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: i64 = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM "user" WHERE id = ?1)"#)
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;

        Ok(found != 0)
    }

    /// 새 사용자 생성
    ///
    /// 서비스 계층의 사전 중복 확인과 별개로, 동시 요청 경쟁은
    /// UNIQUE 제약이 막고 `ConflictError`로 보고됩니다.
    async fn create(&self, user: User) -> AppResult<User> {
        sqlx::query(
            r#"
            INSERT INTO "user" (id, username, password_hash, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.db.pool())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::ConflictError(_) => {
                AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
            }
            other => other,
        })?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?1"#)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

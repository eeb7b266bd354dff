//! # 목록 리포지토리 구현
//!
//! `list` 테이블에 대한 데이터 액세스를 담당합니다.
//! 목록 삭제 시 소속 노트는 외래 키의 `ON DELETE CASCADE`로 함께 제거됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::todo::TodoList;
use crate::repositories::CrudRepository;

/// 목록 데이터 액세스 리포지토리
#[derive(Clone)]
pub struct ListRepository {
    db: Arc<Database>,
}

impl ListRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<TodoList> for ListRepository {
    fn table_name(&self) -> &'static str {
        "list"
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TodoList>> {
        let list = sqlx::query_as::<_, TodoList>(
            r#"
            SELECT id, title, created_at, updated_at
            FROM "list"
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(list)
    }

    async fn find_all(&self) -> AppResult<Vec<TodoList>> {
        let lists = sqlx::query_as::<_, TodoList>(
            r#"
            SELECT id, title, created_at, updated_at
            FROM "list"
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(lists)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: i64 = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM "list" WHERE id = ?1)"#)
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;

        Ok(found != 0)
    }

    async fn create(&self, list: TodoList) -> AppResult<TodoList> {
        sqlx::query(
            r#"
            INSERT INTO "list" (id, title, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(list.id)
        .bind(&list.title)
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(self.db.pool())
        .await?;

        Ok(list)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "list" WHERE id = ?1"#)
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> ListRepository {
        let db = Database::in_memory().await.unwrap();
        ListRepository::new(Arc::new(db))
    }

    #[actix_web::test]
    async fn test_create_then_find() {
        let repo = repository().await;

        let created = repo.create(TodoList::new("groceries".to_string())).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.title, "groceries");
        assert!(repo.exists(created.id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_find_all_in_creation_order() {
        let repo = repository().await;

        let first = repo.create(TodoList::new("first".to_string())).await.unwrap();
        let second = repo.create(TodoList::new("second".to_string())).await.unwrap();

        let ids: Vec<Uuid> = repo.find_all().await.unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[actix_web::test]
    async fn test_delete_missing_returns_false() {
        let repo = repository().await;

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}

//! # 노트 리포지토리 구현
//!
//! `note` 테이블에 대한 데이터 액세스를 담당합니다.
//! `list_id` 참조 무결성은 SQLite 외래 키 제약이 보장합니다.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::todo::Note;
use crate::repositories::CrudRepository;

#[derive(Clone)]
pub struct NoteRepository {
    db: Arc<Database>,
}

impl NoteRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 특정 목록에 속한 노트를 생성 순으로 조회합니다.
    pub async fn find_by_list(&self, list_id: Uuid) -> AppResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, text, list_id, created_at, updated_at
            FROM note
            WHERE list_id = ?1
            ORDER BY created_at ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(notes)
    }
}

#[async_trait]
impl CrudRepository<Note> for NoteRepository {
    fn table_name(&self) -> &'static str {
        "note"
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, text, list_id, created_at, updated_at
            FROM note
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(note)
    }

    async fn find_all(&self) -> AppResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, text, list_id, created_at, updated_at
            FROM note
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(notes)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM note WHERE id = ?1)")
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;

        Ok(found != 0)
    }

    /// 존재하지 않는 목록을 참조하면 외래 키 위반이 `AppError::NotFound`로 변환됩니다.
    async fn create(&self, note: Note) -> AppResult<Note> {
        sqlx::query(
            r#"
            INSERT INTO note (id, text, list_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(note.id)
        .bind(&note.text)
        .bind(note.list_id)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(self.db.pool())
        .await?;

        Ok(note)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM note WHERE id = ?1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::todo::TodoList;
    use crate::repositories::ListRepository;

    async fn repositories() -> (ListRepository, NoteRepository) {
        let db = Arc::new(Database::in_memory().await.unwrap());
        (ListRepository::new(db.clone()), NoteRepository::new(db))
    }

    #[actix_web::test]
    async fn test_find_by_list_only_returns_owned_notes() {
        let (lists, notes) = repositories().await;

        let home = lists.create(TodoList::new("home".to_string())).await.unwrap();
        let work = lists.create(TodoList::new("work".to_string())).await.unwrap();

        notes.create(Note::new("dishes".to_string(), home.id)).await.unwrap();
        notes.create(Note::new("report".to_string(), work.id)).await.unwrap();

        let home_notes = notes.find_by_list(home.id).await.unwrap();
        assert_eq!(home_notes.len(), 1);
        assert_eq!(home_notes[0].text, "dishes");
    }

    #[actix_web::test]
    async fn test_foreign_key_violation_maps_to_not_found() {
        let (_, notes) = repositories().await;

        let result = notes.create(Note::new("orphan".to_string(), Uuid::new_v4())).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_deleting_list_cascades_to_notes() {
        let (lists, notes) = repositories().await;

        let list = lists.create(TodoList::new("temp".to_string())).await.unwrap();
        let note = notes.create(Note::new("gone soon".to_string(), list.id)).await.unwrap();

        assert!(lists.delete(list.id).await.unwrap());
        assert!(!notes.exists(note.id).await.unwrap());
    }
}

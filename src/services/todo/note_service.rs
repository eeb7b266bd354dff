//! 노트 비즈니스 로직

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::todo::{CreateNoteRequest, NoteResponse, MAX_NOTE_TEXT_LENGTH};
use crate::domain::entities::todo::Note;
use crate::repositories::{CrudRepository, ListRepository, NoteRepository};
use crate::utils::string_utils::validate_bounded_string;

pub struct NoteService {
    note_repo: Arc<NoteRepository>,
    list_repo: Arc<ListRepository>,
}

impl NoteService {
    pub fn new(note_repo: Arc<NoteRepository>, list_repo: Arc<ListRepository>) -> Self {
        Self { note_repo, list_repo }
    }

    pub async fn get_all_notes(&self) -> AppResult<Vec<NoteResponse>> {
        let notes = self.note_repo.find_all().await?;

        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn get_note(&self, id: Uuid) -> AppResult<NoteResponse> {
        let note = self.note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| note_not_found(id))?;

        Ok(NoteResponse::from(note))
    }

    /// 노트를 생성합니다.
    ///
    /// 소유 목록의 존재를 먼저 확인하여 404를 반환합니다. 확인과 삽입 사이에
    /// 목록이 삭제되더라도 외래 키 위반이 같은 404로 변환됩니다.
    pub async fn create_note(&self, request: CreateNoteRequest) -> AppResult<NoteResponse> {
        let text = validate_bounded_string(&request.text, "노트 내용", MAX_NOTE_TEXT_LENGTH)?;

        if !self.list_repo.exists(request.list_id).await? {
            return Err(AppError::NotFound(format!(
                "목록을 찾을 수 없습니다: {}",
                request.list_id
            )));
        }

        let created = self.note_repo.create(Note::new(text, request.list_id)).await?;
        log::info!("노트 생성: {} (목록 {})", created.id, created.list_id);

        Ok(NoteResponse::from(created))
    }

    pub async fn delete_note(&self, id: Uuid) -> AppResult<()> {
        if !self.note_repo.delete(id).await? {
            return Err(note_not_found(id));
        }

        log::info!("노트 삭제: {}", id);
        Ok(())
    }
}

fn note_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("노트를 찾을 수 없습니다: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::domain::entities::todo::TodoList;

    struct Fixture {
        service: NoteService,
        list_repo: Arc<ListRepository>,
    }

    async fn fixture() -> Fixture {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let list_repo = Arc::new(ListRepository::new(db.clone()));
        let service = NoteService::new(Arc::new(NoteRepository::new(db)), list_repo.clone());

        Fixture { service, list_repo }
    }

    #[actix_web::test]
    async fn test_create_note_for_missing_list_is_not_found() {
        let fixture = fixture().await;

        let result = fixture
            .service
            .create_note(CreateNoteRequest { text: "milk".to_string(), list_id: Uuid::new_v4() })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(fixture.service.get_all_notes().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_get_delete_note() {
        let fixture = fixture().await;
        let list = fixture.list_repo.create(TodoList::new("home".to_string())).await.unwrap();

        let note = fixture
            .service
            .create_note(CreateNoteRequest { text: " milk ".to_string(), list_id: list.id })
            .await
            .unwrap();
        assert_eq!(note.text, "milk");
        assert_eq!(fixture.service.get_note(note.id).await.unwrap().list_id, list.id);

        fixture.service.delete_note(note.id).await.unwrap();
        assert!(matches!(fixture.service.get_note(note.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(fixture.service.delete_note(note.id).await, Err(AppError::NotFound(_))));
    }
}

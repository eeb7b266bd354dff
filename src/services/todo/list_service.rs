//! 목록 비즈니스 로직

use std::sync::Arc;

use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::todo::{CreateListRequest, ListResponse, NoteResponse, MAX_TITLE_LENGTH};
use crate::domain::entities::todo::TodoList;
use crate::repositories::{CrudRepository, ListRepository, NoteRepository};
use crate::utils::string_utils::validate_bounded_string;

pub struct ListService {
    list_repo: Arc<ListRepository>,
    note_repo: Arc<NoteRepository>,
}

impl ListService {
    pub fn new(list_repo: Arc<ListRepository>, note_repo: Arc<NoteRepository>) -> Self {
        Self { list_repo, note_repo }
    }

    pub async fn get_all_lists(&self) -> AppResult<Vec<ListResponse>> {
        let lists = self.list_repo.find_all().await?;

        Ok(lists.into_iter().map(ListResponse::from).collect())
    }

    pub async fn get_list(&self, id: Uuid) -> AppResult<ListResponse> {
        let list = self.list_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| list_not_found(id))?;

        Ok(ListResponse::from(list))
    }

    /// 목록에 속한 노트를 조회합니다. 목록이 없으면 빈 배열이 아니라 404입니다.
    pub async fn get_list_notes(&self, id: Uuid) -> AppResult<Vec<NoteResponse>> {
        if !self.list_repo.exists(id).await? {
            return Err(list_not_found(id));
        }

        let notes = self.note_repo.find_by_list(id).await?;

        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn create_list(&self, request: CreateListRequest) -> AppResult<ListResponse> {
        let title = validate_bounded_string(&request.title, "목록 제목", MAX_TITLE_LENGTH)?;

        let created = self.list_repo.create(TodoList::new(title)).await?;
        log::info!("목록 생성: {}", created.id);

        Ok(ListResponse::from(created))
    }

    pub async fn delete_list(&self, id: Uuid) -> AppResult<()> {
        if !self.list_repo.delete(id).await? {
            return Err(list_not_found(id));
        }

        log::info!("목록 삭제: {}", id);
        Ok(())
    }
}

fn list_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("목록을 찾을 수 없습니다: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn service() -> ListService {
        let db = Arc::new(Database::in_memory().await.unwrap());
        ListService::new(
            Arc::new(ListRepository::new(db.clone())),
            Arc::new(NoteRepository::new(db)),
        )
    }

    #[actix_web::test]
    async fn test_create_list_trims_title() {
        let service = service().await;

        let created = service
            .create_list(CreateListRequest { title: "  groceries  ".to_string() })
            .await
            .unwrap();

        assert_eq!(created.title, "groceries");
        assert_eq!(service.get_list(created.id).await.unwrap().title, "groceries");
    }

    #[actix_web::test]
    async fn test_missing_list_is_not_found() {
        let service = service().await;
        let id = Uuid::new_v4();

        assert!(matches!(service.get_list(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_list_notes(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete_list(id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_blank_title_rejected() {
        let service = service().await;

        let result = service.create_list(CreateListRequest { title: " ".to_string() }).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::todo::{Note, TodoList};

/// 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoList> for ListResponse {
    fn from(list: TodoList) -> Self {
        let TodoList { id, title, created_at, updated_at } = list;

        Self { id, title, created_at, updated_at }
    }
}

/// 노트 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub text: String,
    pub list_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        let Note { id, text, list_id, created_at, updated_at } = note;

        Self { id, text, list_id, created_at, updated_at }
    }
}

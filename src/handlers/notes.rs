//! # Note HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/note/all` | 전체 노트 조회 | 200 |
//! | `GET` | `/note?note_id=` | 노트 조회 (쿼리) | 200 / 404 |
//! | `GET` | `/note/{note_id}` | 노트 조회 | 200 / 404 |
//! | `POST` | `/note` | 노트 생성 | 201 / 400 / 404 |
//! | `DELETE` | `/note/{note_id}` | 노트 삭제 | 204 / 404 |

use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::todo::{CreateNoteRequest, NoteQuery};
use crate::services::todo::NoteService;

#[get("/all")]
pub async fn get_all_notes(
    service: web::Data<NoteService>,
) -> Result<HttpResponse, AppError> {
    let notes = service.get_all_notes().await?;

    Ok(HttpResponse::Ok().json(notes))
}

#[get("")]
pub async fn get_note_by_query(
    service: web::Data<NoteService>,
    query: web::Query<NoteQuery>,
) -> Result<HttpResponse, AppError> {
    let note = service.get_note(query.note_id).await?;

    Ok(HttpResponse::Ok().json(note))
}

#[get("/{note_id}")]
pub async fn get_note(
    service: web::Data<NoteService>,
    note_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let note = service.get_note(note_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(note))
}

#[post("")]
pub async fn create_note(
    service: web::Data<NoteService>,
    payload: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let note = service.create_note(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(note))
}

#[delete("/{note_id}")]
pub async fn delete_note(
    service: web::Data<NoteService>,
    note_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    service.delete_note(note_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

//! # List HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/list/all` | 전체 목록 조회 | 200 |
//! | `GET` | `/list?list_id=` | 목록 조회 (쿼리) | 200 / 404 |
//! | `GET` | `/list/{list_id}` | 목록 조회 | 200 / 404 |
//! | `GET` | `/list/{list_id}/notes` | 목록의 노트 조회 | 200 / 404 |
//! | `POST` | `/list` | 목록 생성 | 201 / 400 |
//! | `DELETE` | `/list/{list_id}` | 목록 삭제 (노트 포함) | 204 / 404 |
//!
//! `/all`은 `/{list_id}`보다 먼저 등록되어야 합니다.

use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::todo::{CreateListRequest, ListQuery};
use crate::services::todo::ListService;

#[get("/all")]
pub async fn get_all_lists(
    service: web::Data<ListService>,
) -> Result<HttpResponse, AppError> {
    let lists = service.get_all_lists().await?;

    Ok(HttpResponse::Ok().json(lists))
}

#[get("")]
pub async fn get_list_by_query(
    service: web::Data<ListService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let list = service.get_list(query.list_id).await?;

    Ok(HttpResponse::Ok().json(list))
}

#[get("/{list_id}")]
pub async fn get_list(
    service: web::Data<ListService>,
    list_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let list = service.get_list(list_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(list))
}

#[get("/{list_id}/notes")]
pub async fn get_list_notes(
    service: web::Data<ListService>,
    list_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let notes = service.get_list_notes(list_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(notes))
}

#[post("")]
pub async fn create_list(
    service: web::Data<ListService>,
    payload: web::Json<CreateListRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let list = service.create_list(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(list))
}

#[delete("/{list_id}")]
pub async fn delete_list(
    service: web::Data<ListService>,
    list_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    service.delete_list(list_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

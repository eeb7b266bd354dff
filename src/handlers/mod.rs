//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 각 핸들러는 요청을 DTO로 변환하고 서비스 메서드 하나를 호출한 뒤 상태 코드를 정합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, CLI, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - SQLite 접근 (sqlx)              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 서비스는 `web::Data<T>` 추출자로 주입됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_list(
//!     service: web::Data<ListService>,
//!     payload: web::Json<CreateListRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let response = service.create_list(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`lists`] - `/list` 목록 CRUD
//! - [`notes`] - `/note` 노트 CRUD
//! - [`users`] - `/user` 사용자 등록/조회/삭제
//! - [`auth`] - `/auth` 로그인, 회원가입, 토큰 검증

pub mod lists;
pub mod notes;
pub mod users;
pub mod auth;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스 메서드는 최대 한 번의 존재 확인, 한 번의 리포지토리 호출,
//! 응답 DTO로의 변환만 수행합니다. 인스턴스는
//! [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 생성하여 `web::Data`로 주입합니다.
//!
//! # Features
//!
//! - 목록/노트 생명주기 관리 (생성, 조회, 삭제)
//! - 사용자 등록과 bcrypt 비밀번호 검증
//! - JWT 토큰 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{todo::ListService, auth::TokenService};
//!
//! let list_service = ListService::new(list_repo.clone(), note_repo.clone());
//! let lists = list_service.get_all_lists().await?;
//! ```

pub mod todo;
pub mod users;
pub mod auth;

pub use todo::{ListService, NoteService};
pub use users::UserService;
pub use auth::{AuthService, TokenService};

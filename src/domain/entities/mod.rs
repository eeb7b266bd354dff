//! # Domain Entities Module
//!
//! SQLite 테이블과 1:1 대응되는 영속 레코드를 정의합니다.
//! 모든 엔티티는 `sqlx::FromRow`로 조회 결과에서 직접 매핑되며,
//! UUID 기본 키와 생성/수정 시각을 가집니다.
//!
//! ```text
//! list (id, title, created_at, updated_at)
//!   └─< note (id, text, list_id → list.id, created_at, updated_at)
//! user (id, username UNIQUE, password_hash, created_at, updated_at)
//! ```

pub mod todo;
pub mod users;

pub use todo::*;
pub use users::*;

//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`CrudRepository`] 계약을 구현하며, 공유 [`Database`](crate::db::Database)
//! 커넥션 풀을 통해 SQLite에 접근합니다. 인스턴스는 시작 시
//! [`ServiceRegistry`](crate::core::registry::ServiceRegistry)가 한 번 생성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{CrudRepository, todo::ListRepository};
//!
//! let lists = ListRepository::new(database.clone());
//! let all = lists.find_all().await?;
//! ```

pub mod todo;
pub mod users;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::errors::AppResult;

pub use todo::{ListRepository, NoteRepository};
pub use users::UserRepository;

/// 엔티티별 리포지토리가 공통으로 제공하는 CRUD 계약
///
/// 수정(update) 연산은 존재하지 않습니다. 레코드는 생성되고 조회되고 삭제될 뿐입니다.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// 리포지토리가 다루는 테이블 이름
    fn table_name(&self) -> &'static str;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    /// 생성 시각 오름차순으로 전체 레코드를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// 레코드를 삽입하고 저장된 값을 그대로 반환합니다.
    async fn create(&self, entity: T) -> AppResult<T>;

    /// 삭제된 행이 있으면 `true`를 반환합니다.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

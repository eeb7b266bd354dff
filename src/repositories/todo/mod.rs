//! 목록/노트 데이터 액세스 리포지토리

pub mod list_repo;
pub mod note_repo;

pub use list_repo::ListRepository;
pub use note_repo::NoteRepository;

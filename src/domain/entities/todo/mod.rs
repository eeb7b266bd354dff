//! 할 일 목록 엔티티 모듈

pub mod todo_list;
pub mod note;

pub use todo_list::TodoList;
pub use note::Note;

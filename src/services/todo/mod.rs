pub mod list_service;
pub mod note_service;

pub use list_service::ListService;
pub use note_service::NoteService;

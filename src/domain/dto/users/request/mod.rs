//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 JSON을 구조화된 타입으로 역직렬화하고 `validator`로 검증합니다.
//! 검증 실패 시 `validator::ValidationErrors`는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod create_user;
pub mod auth_request;

pub use create_user::CreateUserRequest;
pub use auth_request::LoginRequest;

//! # 사용자 관련 응답 DTO 모듈
//!
//! 응답에는 비밀번호 해시가 절대 포함되지 않습니다.
//!
//! ```json
//! {
//!   "id": "0b7f3c1e-5a9d-4c7e-9d7a-2f3b1c4d5e6f",
//!   "username": "john_doe",
//!   "created_at": "2024-06-01T10:00:00Z",
//!   "updated_at": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{TokenResponse, UserResponse, VerifyTokenResponse};

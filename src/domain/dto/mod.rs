//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체를 정의합니다.
//! 엔티티와 DTO를 분리하여 내부 저장 구조(비밀번호 해시 등)가 응답에 새어 나가지 않도록 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── todo/               # 목록/노트 DTO
//! │   ├── request.rs      # CreateListRequest, CreateNoteRequest, 쿼리 파라미터
//! │   └── response.rs     # ListResponse, NoteResponse
//! └── users/              # 사용자/인증 DTO
//!     ├── request/        # 회원가입, 로그인 요청
//!     └── response/       # 사용자, 토큰, 토큰 검증 응답
//! ```
//!
//! ## 변환 패턴
//!
//! - **Entity → Response**: `impl From<Entity> for Response`
//! - **Request 검증**: `validator::Validate` 구현 후 핸들러에서 `validate()` 호출
//!
//! ## 날짜/시간
//!
//! 모든 시각은 UTC이며 JSON에서는 RFC 3339 문자열로 직렬화됩니다.

pub mod todo;
pub mod users;

pub use todo::{CreateListRequest, CreateNoteRequest, ListQuery, ListResponse, NoteQuery, NoteResponse};
pub use users::{CreateUserRequest, LoginRequest, TokenResponse, UserResponse, VerifyTokenResponse};

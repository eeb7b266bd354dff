//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 영속 엔티티와 API 계약(DTO),
//! 인증 관련 도메인 모델을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - SQLite 테이블과 1:1 매핑되는 레코드 (list, note, user)
//! ├── DTOs          - 요청/응답 데이터 전송 객체
//! └── Models        - JWT 클레임, 인증된 사용자 등 인증 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 영속 엔티티
//! - `TodoList`: 노트를 묶는 이름 있는 목록
//! - `Note`: 정확히 하나의 목록에 속한 텍스트 항목
//! - `User`: 로그인 가능한 사용자 (bcrypt 해시 보관)
//!
//! ### [`dto`] - 데이터 전송 객체
//! 엔티티와 분리된 요청/응답 구조체입니다. 응답 DTO는 비밀번호 해시 같은
//! 내부 필드를 노출하지 않습니다.
//!
//! ### [`models`] - 인증 모델
//! JWT 클레임과 미들웨어가 요청 확장에 저장하는 `AuthenticatedUser`를 정의합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Note, TodoList, User};
pub use models::{AuthMode, AuthenticatedUser, OptionalUser, TokenClaims};

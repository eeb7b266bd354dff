//! 할 일 목록 서비스 백엔드
//!
//! 목록(list)과 목록에 속한 노트(note)를 관리하는 REST API 서비스입니다.
//! 사용자 등록과 JWT 기반 인증을 제공하며, 목록/노트 라우트의 인증 필요 여부는
//! `AUTH_ENABLED` 설정으로 결정됩니다.
//!
//! # Features
//!
//! - **목록/노트 CRUD**: 생성, 조회, 삭제 (목록 삭제 시 노트 연쇄 삭제)
//! - **사용자 관리**: 회원가입, 조회, 삭제 (bcrypt 비밀번호 해싱)
//! - **JWT 인증**: HMAC 서명 액세스 토큰, `Authorization: Bearer` 또는 `X-API-KEY`
//! - **SQLite**: sqlx 커넥션 풀과 시작 시 마이그레이션
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 토큰/해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CrudRepository<T>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← list, note, user 테이블
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use todo_service_backend::config::{PasswordConfig, Settings};
//! use todo_service_backend::core::registry::ServiceRegistry;
//! use todo_service_backend::db::Database;
//! use todo_service_backend::routes::configure_app;
//!
//! let settings = Settings::from_env()?;
//! let database = Database::connect(&settings.database).await?;
//! database.migrate().await?;
//!
//! let registry = ServiceRegistry::build(database, &settings.jwt, PasswordConfig::bcrypt_cost());
//! let app = App::new().configure(|cfg| configure_app(cfg, &registry, &settings.auth));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

//! # Core Module
//!
//! 애플리케이션 전반에서 공유되는 기반 구성 요소입니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, HTTP 응답 매핑
//! - [`registry`] - 리포지토리/서비스 생성과 `web::Data` 등록

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registry::ServiceRegistry;

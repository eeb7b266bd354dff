//! # Application Error Handling System
//!
//! 할 일 목록 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 목록/노트/사용자 없음 |
//! | `ConflictError` | 409 Conflict | 사용자명 중복 |
//! | `AuthenticationError` | 401 Unauthorized | 로그인 실패, 토큰 누락/만료/위조 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `DatabaseError` | 500 Internal Server Error | SQLite 오류 |
//! | `InternalError` | 500 Internal Server Error | 해싱/토큰 생성 실패 등 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: 목록을 찾을 수 없습니다" }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_list(&self, id: Uuid) -> AppResult<ListResponse> {
//!     let list = self.list_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("목록을 찾을 수 없습니다".to_string()))?;
//!     Ok(ListResponse::from(list))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러가 `Result<HttpResponse, AppError>`를 반환하면 actix-web이
/// [`actix_web::ResponseError`] 구현으로 상태 코드와 JSON 본문을 만듭니다.
/// 메시지는 클라이언트에 그대로 노출되므로 내부 정보를 담지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// SQLite 연결, 쿼리, 마이그레이션 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 빈 제목, 너무 긴 노트, 잘못된 UUID, 깨진 JSON 본문
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 이미 사용 중인 사용자명
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 잘못된 자격 증명, 토큰 누락/만료/위조
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 역할 모델이 없어 현재는 발생하지 않음
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 해싱/토큰 인코딩 실패
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 변형에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남기고, 클라이언트에는 동일한 JSON 형식으로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<sqlx::Error> for AppError {
    /// sqlx 에러를 변환합니다.
    ///
    /// 유니크 제약 위반은 409, 외래 키 위반은 404로 매핑하고
    /// 그 외 모든 오류는 `DatabaseError`가 됩니다.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::ConflictError("이미 존재하는 리소스입니다".to_string());
            }
            if db_err.is_foreign_key_violation() {
                return AppError::NotFound("참조하는 리소스를 찾을 수 없습니다".to_string());
            }
        }
        AppError::DatabaseError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(format!("마이그레이션 실패: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::InternalError(format!("비밀번호 처리 실패: {}", err))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// // Before: Result<NoteResponse, AppError>
/// // After: AppResult<NoteResponse>
/// async fn create_note(&self, request: CreateNoteRequest) -> AppResult<NoteResponse>;
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// `Display` 가능한 외부 에러에 설명을 붙여 `InternalError`로 바꾸는 확장 trait
///
/// ```rust,ignore
/// let options = SqliteConnectOptions::from_str(&config.url)
///     .with_context(|| format!("잘못된 DB_URL: {}", config.url))?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    /// 실패했을 때만 메시지를 만듭니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: std::fmt::Display> ErrorContext<T> for Result<T, E> {
    fn context(self, msg: &str) -> AppResult<T> {
        self.with_context(|| msg.to_string())
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn test_each_variant_maps_to_its_status() {
        let cases = [
            (AppError::ValidationError("제목은 필수입니다".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("목록".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("alice".into()), StatusCode::CONFLICT),
            (AppError::AuthenticationError("Invalid credentials".into()), StatusCode::UNAUTHORIZED),
            (AppError::AuthorizationError("삭제 권한 없음".into()), StatusCode::FORBIDDEN),
            (AppError::DatabaseError("disk I/O error".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("bcrypt".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{}", error);
            assert_eq!(error.error_response().status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_error_body_is_json_with_message() {
        let response = AppError::NotFound("목록을 찾을 수 없습니다".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Not found: 목록을 찾을 수 없습니다" }));
    }

    #[actix_web::test]
    async fn test_row_not_found_becomes_database_error() {
        let error = AppError::from(sqlx::Error::RowNotFound);

        assert!(matches!(error, AppError::DatabaseError(_)));
    }

    #[actix_web::test]
    async fn test_context_prefixes_source_message() {
        let parsed: Result<u16, _> = "eighty".parse::<u16>();

        match parsed.context("PORT 파싱 실패") {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.starts_with("PORT 파싱 실패: "));
                assert!(msg.contains("invalid digit"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_with_context_is_lazy() {
        let ok: Result<u8, &str> = Ok(7);

        assert_eq!(ok.with_context(|| panic!("must not be evaluated")).unwrap(), 7);
    }
}

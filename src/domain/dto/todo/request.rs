//! # 목록/노트 요청 DTO
//!
//! 입력 문자열은 앞뒤 공백을 제거한 뒤의 길이로 검증합니다.
//! 실제 저장 시에도 서비스 계층에서 동일하게 trim된 값을 사용합니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 목록 제목 최대 길이 (문자 수)
pub const MAX_TITLE_LENGTH: usize = 255;

/// 노트 본문 최대 길이 (문자 수)
pub const MAX_NOTE_TEXT_LENGTH: usize = 10_000;

/// 목록 생성 요청
///
/// ```json
/// { "title": "Groceries" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateListRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
}

/// 노트 생성 요청
///
/// ```json
/// { "text": "Buy milk", "list_id": "0b7f3c1e-..." }
/// ```
///
/// `list_id`가 가리키는 목록의 존재 여부는 서비스 계층에서 확인합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(custom(function = "validate_note_text"))]
    pub text: String,
    pub list_id: Uuid,
}

/// `GET /list?list_id=` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub list_id: Uuid,
}

/// `GET /note?note_id=` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct NoteQuery {
    pub note_id: Uuid,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(title, MAX_TITLE_LENGTH, "invalid_title", "목록 제목은 1-255자 사이여야 합니다")
}

fn validate_note_text(text: &str) -> Result<(), ValidationError> {
    validate_trimmed_length(text, MAX_NOTE_TEXT_LENGTH, "invalid_text", "노트 내용은 1-10000자 사이여야 합니다")
}

fn validate_trimmed_length(
    value: &str,
    max: usize,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();

    if length == 0 || length > max {
        return Err(ValidationError::new(code).with_message(message.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_is_rejected() {
        let request = CreateListRequest { title: "   ".to_string() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_title_length_counts_characters_after_trim() {
        let padded = format!("  {}  ", "가".repeat(MAX_TITLE_LENGTH));
        assert!(CreateListRequest { title: padded }.validate().is_ok());

        let too_long = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(CreateListRequest { title: too_long }.validate().is_err());
    }

    #[test]
    fn test_note_text_limits() {
        let list_id = Uuid::new_v4();

        let ok = CreateNoteRequest { text: "Buy milk".to_string(), list_id };
        assert!(ok.validate().is_ok());

        let blank = CreateNoteRequest { text: "\n\t".to_string(), list_id };
        assert!(blank.validate().is_err());

        let huge = CreateNoteRequest { text: "x".repeat(MAX_NOTE_TEXT_LENGTH + 1), list_id };
        assert!(huge.validate().is_err());
    }
}

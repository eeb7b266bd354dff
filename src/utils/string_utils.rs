//! 문자열 입력 정규화 유틸리티
//!
//! 요청 DTO의 `validator` 검증을 통과한 값도 저장 직전에 다시 정규화합니다.
//! 서비스 계층이 핸들러를 거치지 않고 호출되는 경우에도 같은 규칙이 적용됩니다.

use crate::core::errors::AppError;

/// 앞뒤 공백을 제거하고 비어 있으면 검증 에러를 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 필수 문자열을 정규화하고 최대 문자 수(바이트가 아닌 `char` 단위)를 검사합니다.
pub fn validate_bounded_string(value: &str, field_name: &str, max_chars: usize) -> Result<String, AppError> {
    let trimmed = validate_required_string(value, field_name)?;
    if trimmed.chars().count() > max_chars {
        return Err(AppError::ValidationError(
            format!("{}은(는) {}자를 초과할 수 없습니다", field_name, max_chars)
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "name").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");

        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_validate_bounded_string_counts_chars() {
        // 한글 3자는 9바이트지만 3자로 계산
        assert_eq!(validate_bounded_string(" 안녕하 ", "title", 3).unwrap(), "안녕하");
        assert!(validate_bounded_string("안녕하세", "title", 3).is_err());
        assert!(validate_bounded_string("   ", "title", 3).is_err());
    }
}

//! 회원가입 요청 DTO
//!
//! `POST /user`와 `POST /auth/register`가 같은 본문을 받습니다.
//! 사용자명 유일성은 여기서 검사하지 않고 `UserService`와 UNIQUE 제약이 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// `{"username": "alice_01", "password": "correct-horse"}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 평문. 해싱 직후 버려집니다.
    #[validate(length(min = 8, max = 128, message = "비밀번호는 8-128자 사이여야 합니다"))]
    pub password: String,
}

/// ASCII 영문, 숫자, 언더스코어만 허용합니다.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        let mut error = ValidationError::new("username_charset");
        error.message = Some("사용자명은 영문, 숫자, 밑줄(_)만 사용할 수 있습니다".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(request("john_doe123", "password123").validate().is_ok());
    }

    #[test]
    fn test_username_rules() {
        assert!(request("ab", "password123").validate().is_err());
        assert!(request(&"a".repeat(31), "password123").validate().is_err());
        assert!(request("user-name", "password123").validate().is_err());
        assert!(request("사용자이름", "password123").validate().is_err());
    }

    #[test]
    fn test_password_length_rules() {
        assert!(request("john_doe", "short").validate().is_err());
        assert!(request("john_doe", &"p".repeat(129)).validate().is_err());
        assert!(request("john_doe", &"p".repeat(128)).validate().is_ok());
    }
}

//! 여러 계층에서 함께 쓰는 보조 함수
//!
//! - [`string_utils`] - 제목/본문 같은 사용자 입력의 공백 제거와 길이 검증
//! - [`display_terminal`] - 서버 시작 시 구성 요약 출력
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_bounded_string;
//!
//! let title = validate_bounded_string("  Groceries ", "목록 제목", 255)?;
//! assert_eq!(title, "Groceries");
//! ```

pub mod display_terminal;
pub mod string_utils;

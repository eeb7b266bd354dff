//! # User Data Transfer Objects Module
//!
//! 사용자 및 인증 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs     # 회원가입 요청 (POST /user, POST /auth/register)
//! │   └── auth_request.rs    # 로그인 요청 (POST /auth, POST /auth/login)
//! └── response/
//!     └── user_response.rs   # UserResponse, TokenResponse, VerifyTokenResponse
//! ```
//!
//! ## 엔드포인트 매핑
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |-----------|------|------|
//! | `POST /user` | `CreateUserRequest` | `201 UserResponse` |
//! | `POST /auth/login` | `LoginRequest` | `200 TokenResponse` |
//! | `POST /auth/verify` | Bearer 토큰 | `200 VerifyTokenResponse` |
//! | `GET /user/me` | Bearer 토큰 | `200 UserResponse` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            created_at,
            updated_at,
        }
    }
}

/// 로그인 응답 DTO (JWT 액세스 토큰)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// 항상 `"bearer"`
    pub token_type: String,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

/// 토큰 검증 결과 DTO (`POST /auth/verify`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user_id: Uuid,
    pub username: String,
}

impl From<User> for VerifyTokenResponse {
    fn from(user: User) -> Self {
        Self {
            valid: true,
            user_id: user.id,
            username: user.username,
        }
    }
}

//! 사용자 엔티티
//!
//! `user` 테이블과 매핑되는 사용자 레코드입니다.
//! 비밀번호는 bcrypt 해시로만 저장되며 평문은 어디에도 보관하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 로그인 가능한 사용자
///
/// `password_hash`는 직렬화 대상에서 제외되어 실수로 응답에 포함되는 일이 없도록 합니다.
/// API 응답에는 항상 [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    /// 시스템 전체에서 유니크한 사용자명
    pub username: String,
    /// bcrypt 해시
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 이미 해시된 비밀번호로 새 사용자를 생성합니다.
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}

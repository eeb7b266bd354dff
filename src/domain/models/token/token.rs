//! JWT 액세스 토큰 클레임
//!
//! RFC 7519 표준 클레임에 사용자 ID를 한 번 더 담습니다.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `user_id`: 사용자 ID (`sub`와 동일, 기존 클라이언트 호환용)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(user_id: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            user_id: user_id.to_string(),
            iat,
            exp,
        }
    }

    /// `sub` 클레임을 UUID로 해석합니다.
    pub fn subject_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

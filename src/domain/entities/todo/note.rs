//! 노트 엔티티

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 정확히 하나의 목록에 속한 텍스트 항목
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    /// 소유 목록 ID (`list.id` 외래 키)
    pub list_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(text: String, list_id: Uuid) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            text,
            list_id,
            created_at: now,
            updated_at: now,
        }
    }
}

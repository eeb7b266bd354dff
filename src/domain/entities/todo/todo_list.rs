//! 할 일 목록 엔티티

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 이름 있는 노트 묶음
///
/// `list` 테이블의 한 행에 해당합니다. 목록이 삭제되면 소속 노트도
/// `ON DELETE CASCADE`로 함께 삭제됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TodoList {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoList {
    /// 새 목록을 생성합니다. ID와 생성 시각은 애플리케이션에서 할당합니다.
    pub fn new(title: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_has_fresh_identity() {
        let first = TodoList::new("groceries".to_string());
        let second = TodoList::new("groceries".to_string());

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
    }
}

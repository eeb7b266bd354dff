//! # 사용자 서비스
//!
//! 사용자 등록, 조회, 삭제와 비밀번호 검증을 담당합니다.
//! 비밀번호는 bcrypt로 해싱되며, cost는 [`PasswordConfig`](crate::config::PasswordConfig)에서 결정됩니다.

use std::sync::Arc;

use bcrypt::hash;
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::CreateUserRequest, response::UserResponse},
        entities::users::user::User,
    },
    repositories::{CrudRepository, UserRepository},
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub struct UserService {
    user_repo: Arc<UserRepository>,
    bcrypt_cost: u32,
    /// 존재하지 않는 사용자 로그인 시 비교할 해시 (최초 사용 시 생성)
    dummy_hash: OnceCell<String>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            bcrypt_cost,
            dummy_hash: OnceCell::new(),
        }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명이 이미 사용 중인 경우
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        if self.user_repo.exists_by_username(&request.username).await? {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let created_user = self
            .user_repo
            .create(User::new_local(request.username, password_hash))
            .await?;

        log::info!(
            "사용자 생성: {} ({:?})",
            created_user.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 토큰 주체로 사용자를 조회합니다. 토큰 발급 후 삭제된 사용자는 인증 실패로 처리합니다.
    pub async fn find_token_subject(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자가 존재하지 않습니다".to_string()))
    }

    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("사용자 삭제: {}", id);
        Ok(())
    }

    /// 사용자명과 비밀번호를 검증합니다.
    ///
    /// 존재하지 않는 사용자와 틀린 비밀번호는 같은 메시지의 `AuthenticationError`를 반환하며,
    /// 사용자가 없을 때도 bcrypt 검증을 한 번 수행해 응답 시간 차이를 줄입니다.
    pub async fn verify_password(&self, username: &str, password: &str) -> AppResult<User> {
        let verify_start = std::time::Instant::now();

        let user = self.user_repo.find_by_username(username).await?;

        let password_hash = match &user {
            Some(user) => user.password_hash.as_str(),
            None => self.dummy_hash()?,
        };

        let is_valid = bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        match user {
            Some(user) if is_valid => Ok(user),
            _ => {
                log::warn!("로그인 실패: {}", username);
                Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    fn dummy_hash(&self) -> AppResult<&str> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| hash("dummy-password-for-timing", self.bcrypt_cost))?;

        Ok(hash.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn service() -> UserService {
        let db = Arc::new(Database::in_memory().await.unwrap());
        UserService::new(Arc::new(UserRepository::new(db)), 4)
    }

    fn request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_password_is_hashed() {
        let service = service().await;

        let created = service.create_user(request("alice", "password123")).await.unwrap();
        let user = service.find_token_subject(created.id).await.unwrap();

        assert_ne!(user.password_hash, "password123");
        assert!(bcrypt::verify("password123", &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_duplicate_username_conflict() {
        let service = service().await;

        service.create_user(request("alice", "password123")).await.unwrap();
        let result = service.create_user(request("alice", "different456")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_verify_password_same_error_for_unknown_user_and_bad_password() {
        let service = service().await;
        service.create_user(request("alice", "password123")).await.unwrap();

        let wrong_password = service.verify_password("alice", "wrong-password").await;
        let unknown_user = service.verify_password("mallory", "password123").await;

        match (wrong_password, unknown_user) {
            (Err(AppError::AuthenticationError(a)), Err(AppError::AuthenticationError(b))) => {
                assert_eq!(a, b);
            }
            other => panic!("unexpected results: {:?}", other),
        }

        assert!(service.verify_password("alice", "password123").await.is_ok());
    }
}

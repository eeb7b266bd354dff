//! # 인증 서비스
//!
//! 로그인(자격 증명 → 토큰), 회원가입, 토큰 검증 흐름을 조합합니다.
//! 비밀번호 검증은 [`UserService`], 토큰 처리는 [`TokenService`]에 위임합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{
    request::{CreateUserRequest, LoginRequest},
    response::{TokenResponse, UserResponse, VerifyTokenResponse},
};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

pub struct AuthService {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(user_service: Arc<UserService>, token_service: Arc<TokenService>) -> Self {
        Self { user_service, token_service }
    }

    /// 자격 증명을 검증하고 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자가 없거나 비밀번호가 틀린 경우 (동일 메시지)
    pub async fn authenticate(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        let user = self
            .user_service
            .verify_password(&request.username, &request.password)
            .await?;

        let token = self.token_service.issue(&user)?;
        log::info!("로그인 성공: {}", user.username);

        Ok(token)
    }

    pub async fn register(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        self.user_service.create_user(request).await
    }

    /// 토큰을 검증하고, 토큰 주체가 아직 존재하는지 확인합니다.
    pub async fn verify(&self, token: &str) -> AppResult<VerifyTokenResponse> {
        let claims = self.token_service.verify_token(token)?;

        let user_id = claims
            .subject_id()
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

        let user = self.user_service.find_token_subject(user_id).await?;

        Ok(VerifyTokenResponse::from(user))
    }
}

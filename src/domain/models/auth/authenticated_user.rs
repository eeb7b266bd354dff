use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (`sub` 클레임)
    pub user_id: Uuid,
}

/// 선택적 인증에서 토큰이 거부된 사유
///
/// 만료/위조 같은 구체적인 메시지를 토큰이 필수인 핸들러까지 전달합니다.
#[derive(Debug, Clone)]
pub struct AuthRejection(pub String);

impl From<AppError> for AuthRejection {
    fn from(err: AppError) -> Self {
        match err {
            AppError::AuthenticationError(message) => AuthRejection(message),
            other => AuthRejection(other.to_string()),
        }
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 요청 확장에 넣어둔 값을 꺼냅니다. 토큰이 거부된 요청은 그 사유를,
/// 미들웨어가 없는 라우트에서는 일반 메시지의 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let extensions = req.extensions();

        if let Some(user) = extensions.get::<AuthenticatedUser>() {
            return ready(Ok(user.clone()));
        }

        let message = extensions
            .get::<AuthRejection>()
            .map(|rejection| rejection.0.clone())
            .unwrap_or_else(|| "인증되지 않은 요청입니다".to_string());

        ready(Err(AppError::AuthenticationError(message)))
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

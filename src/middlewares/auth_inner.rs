//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::domain::models::auth::{AuthMode, AuthRejection, AuthenticatedUser};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            let auth_result = authenticate_request(&req).await;

            match auth_result {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                // 서버 오류는 선택적 인증에서도 그대로 응답합니다
                Err(err) if mode == AuthMode::Required || err.status().is_server_error() => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                Err(err) => {
                    log::debug!("선택적 인증: {}, 익명으로 요청 진행", err);
                    // 토큰이 필수인 핸들러가 실패 사유를 그대로 돌려줄 수 있도록 남겨둡니다
                    req.extensions_mut().insert(AuthRejection::from(err));
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증한 뒤, 토큰 주체가 아직 존재하는지 확인
async fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 등록되지 않았습니다".to_string()))?;

    let token = token_service.extract_request_token(req.headers())?;
    let claims = token_service.verify_token(token)?;

    let user_id = claims
        .subject_id()
        .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()))?;

    // 서명이 유효한 토큰만 여기까지 오므로 조회는 한 번뿐입니다
    let user_service = req
        .app_data::<web::Data<UserService>>()
        .ok_or_else(|| AppError::InternalError("UserService가 등록되지 않았습니다".to_string()))?;
    user_service.find_token_subject(user_id).await?;

    Ok(AuthenticatedUser { user_id })
}

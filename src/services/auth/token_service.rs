//! # JWT 토큰 서비스
//!
//! HMAC 공유 비밀 키로 액세스 토큰을 발급하고 검증합니다.
//! 서명 알고리즘과 유효 시간은 [`JwtConfig`]에서 결정됩니다.
//!
//! ## 토큰 전달 방식
//!
//! - `Authorization: Bearer <jwt>` (기본)
//! - `X-API-KEY: <jwt>` (기존 클라이언트 호환)

use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::domain::dto::users::response::TokenResponse;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::TokenClaims;

/// API 키 헤더 이름
pub const API_KEY_HEADER: &str = "X-API-KEY";

pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 사용자에 대한 액세스 토큰을 발급합니다.
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = Duration::try_hours(self.config.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "토큰 만료 시각을 계산할 수 없습니다: {}시간",
                    self.config.expiration_hours
                ))
            })?;

        let claims = TokenClaims::new(user.id, now.timestamp(), expiration.timestamp());

        self.encode_claims(&claims)
    }

    /// 로그인 응답 형태로 토큰을 발급합니다.
    pub fn issue(&self, user: &User) -> Result<TokenResponse, AppError> {
        let access_token = self.generate_access_token(user)?;

        Ok(TokenResponse::bearer(access_token, self.expires_in()))
    }

    pub fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::new(self.config.algorithm), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료 시간을 검증하고 클레임을 반환합니다.
    ///
    /// 만료된 토큰은 "토큰이 만료되었습니다", 그 외 모든 디코딩 실패는
    /// "유효하지 않은 토큰입니다" 메시지의 `AuthenticationError`가 됩니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다. 스킴 이름은 대소문자를 구분하지 않습니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        let invalid = || AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string());

        let (scheme, token) = auth_header.trim().split_once(' ').ok_or_else(invalid)?;
        let token = token.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return Err(invalid());
        }

        Ok(token)
    }

    /// 요청 헤더에서 토큰을 찾습니다.
    ///
    /// `Authorization` 헤더가 있으면 Bearer 형식이어야 하며, 없을 때만 `X-API-KEY`를 확인합니다.
    pub fn extract_request_token<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, AppError> {
        if let Some(value) = headers.get(AUTHORIZATION) {
            let auth_header = value
                .to_str()
                .map_err(|_| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))?;
            return self.extract_bearer_token(auth_header);
        }

        headers
            .get(API_KEY_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("인증 토큰이 없습니다".to_string()))
    }

    pub fn expires_in(&self) -> i64 {
        self.config.expires_in_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new("test-secret", Algorithm::HS256, 1))
    }

    fn user() -> User {
        User::new_local("alice".to_string(), "hash".to_string())
    }

    #[test]
    fn test_issue_and_verify() {
        let service = service();
        let user = user();

        let response = service.issue(&user).unwrap();
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.expires_in, 3600);

        let claims = service.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.user_id, claims.sub);
        assert_eq!(claims.subject_id(), Some(user.id));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let past = Utc::now() - Duration::hours(2);
        let claims = TokenClaims::new(user().id, past.timestamp(), (past + Duration::minutes(5)).timestamp());
        let token = service.encode_claims(&claims).unwrap();

        match service.verify_token(&token) {
            Err(AppError::AuthenticationError(message)) => assert_eq!(message, "토큰이 만료되었습니다"),
            other => panic!("expected expiry error, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_and_foreign_tokens_rejected() {
        let service = service();
        let token = service.generate_access_token(&user()).unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(matches!(service.verify_token(&tampered), Err(AppError::AuthenticationError(_))));

        let other = TokenService::new(JwtConfig::new("other-secret", Algorithm::HS256, 1));
        assert!(matches!(other.verify_token(&token), Err(AppError::AuthenticationError(_))));

        assert!(matches!(service.verify_token("not-a-jwt"), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_algorithm_mismatch_rejected() {
        let hs512 = TokenService::new(JwtConfig::new("test-secret", Algorithm::HS512, 1));
        let token = hs512.generate_access_token(&user()).unwrap();

        assert!(service().verify_token(&token).is_err());
    }

    #[test]
    fn test_issue_and_verify_with_hs384_and_hs512() {
        for algorithm in [Algorithm::HS384, Algorithm::HS512] {
            let service = TokenService::new(JwtConfig::new("test-secret", algorithm, 2));
            let user = user();

            let response = service.issue(&user).unwrap();
            assert_eq!(response.expires_in, 7200);

            let header = jsonwebtoken::decode_header(&response.access_token).unwrap();
            assert_eq!(header.alg, algorithm);

            let claims = service.verify_token(&response.access_token).unwrap();
            assert_eq!(claims.subject_id(), Some(user.id));
            assert_eq!(claims.exp - claims.iat, 7200);
        }
    }

    #[test]
    fn test_unrepresentable_lifetime_is_an_error() {
        let service = TokenService::new(JwtConfig::new("test-secret", Algorithm::HS256, 10_000_000_000_000));

        assert!(matches!(service.issue(&user()), Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert_eq!(service.extract_bearer_token("bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic dXNlcjpwYXNz").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("abc.def").is_err());
    }

    #[test]
    fn test_extract_request_token_falls_back_to_api_key() {
        use actix_web::http::header::{HeaderName, HeaderValue};

        let service = service();
        let mut headers = HeaderMap::new();
        assert!(service.extract_request_token(&headers).is_err());

        headers.insert(HeaderName::from_static("x-api-key"), HeaderValue::from_static("api.key.token"));
        assert_eq!(service.extract_request_token(&headers).unwrap(), "api.key.token");

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer header.token"));
        assert_eq!(service.extract_request_token(&headers).unwrap(), "header.token");
    }
}

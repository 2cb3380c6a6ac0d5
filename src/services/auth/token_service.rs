//! # JWT 토큰 서비스
//!
//! HMAC-SHA256으로 서명된 액세스 토큰을 발급하고 검증합니다.
//! 서명 비밀키, 발급자(issuer), 대상(audience), 만료 시간은 시작 시점에 읽은
//! [`JwtConfig`]로 한 번만 주입되며, 서비스는 이후 환경 변수를 읽지 않습니다.
//!
//! ## 검증 항목
//!
//! - 서명 (HS256, 설정된 비밀키)
//! - `iss` / `aud`가 설정값과 일치
//! - `exp` 만료 여부 (jsonwebtoken 기본 leeway 60초)
//!
//! 검증 실패는 원인과 관계없이 모두 `AuthenticationError`(401)입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::User;
use crate::domain::models::token::{IssuedToken, TokenClaims};

#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 저장된 사용자에 대한 액세스 토큰을 발급합니다.
    pub fn issue(&self, user: &User) -> AppResult<IssuedToken> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let now = Utc::now();
        let (lifetime, expires_at) = Duration::try_minutes(self.config.expire_minutes)
            .and_then(|lifetime| Some((lifetime, now.checked_add_signed(lifetime)?)))
            .ok_or_else(|| {
                AppError::ConfigError(format!(
                    "JWT_EXPIRE_MINUTES 범위 초과: {}",
                    self.config.expire_minutes
                ))
            })?;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: lifetime.num_seconds(),
        })
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        AppError::AuthenticationError("El token ha expirado".to_string())
                    }
                    _ => AppError::AuthenticationError("Token inválido".to_string()),
                }
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "Formato de cabecera de autorización inválido".to_string(),
            )),
        }
    }
}

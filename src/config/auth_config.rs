//! 인증 관련 설정
//!
//! 토큰 서명 비밀키, 발급자(issuer), 대상(audience), 만료 시간과
//! 시작 시점에 생성할 관리자 계정 정보를 다룹니다.

use std::fmt;

use crate::core::errors::{AppError, AppResult};

use super::data_config::{parse_or, Environment};
use super::Lookup;

const DEVELOPMENT_SECRET: &str = "productos-api-development-secret";

/// 토큰 수명 상한 (30일)
pub const MAX_EXPIRE_MINUTES: i64 = 30 * 24 * 60;

/// JWT 설정
///
/// 서명 비밀키는 `Debug` 출력에서 가려집니다.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expire_minutes: i64,
}

impl JwtConfig {
    /// 스테이징/프로덕션에서 `JWT_SECRET`이 없으면 설정 에러입니다.
    /// 개발/테스트 환경에서는 경고와 함께 고정 비밀키를 사용합니다.
    pub fn load(lookup: Lookup<'_>, environment: Environment) -> AppResult<Self> {
        let secret = match lookup("JWT_SECRET").filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None if environment.exposes_internal_errors() => {
                log::warn!("JWT_SECRET not set, using development default (not secure for production!)");
                DEVELOPMENT_SECRET.to_string()
            }
            None => {
                return Err(AppError::ConfigError(format!(
                    "JWT_SECRET must be set in {} environment",
                    environment.as_str()
                )));
            }
        };

        let expire_minutes: i64 = parse_or(lookup, "JWT_EXPIRE_MINUTES", 60)?;
        if !(1..=MAX_EXPIRE_MINUTES).contains(&expire_minutes) {
            return Err(AppError::ConfigError(format!(
                "JWT_EXPIRE_MINUTES must be between 1 and {}",
                MAX_EXPIRE_MINUTES
            )));
        }

        Ok(Self {
            secret,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "productos-api".to_string()),
            audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| "productos-app".to_string()),
            expire_minutes,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expire_minutes", &self.expire_minutes)
            .finish()
    }
}

/// 시작 시점에 생성하는 관리자 계정
#[derive(Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub email: String,
    pub password: String,
}

impl SeedConfig {
    /// `SEED_ADMIN_EMAIL`과 `SEED_ADMIN_PASSWORD`가 모두 있을 때만 `Some`입니다.
    pub fn load(lookup: Lookup<'_>) -> Option<Self> {
        match (lookup("SEED_ADMIN_EMAIL"), lookup("SEED_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Some(Self {
                    email: email.trim().to_string(),
                    password,
                })
            }
            (Some(_), None) | (None, Some(_)) => {
                log::warn!("SEED_ADMIN_EMAIL과 SEED_ADMIN_PASSWORD는 함께 설정해야 합니다. 계정 생성을 건너뜁니다");
                None
            }
            _ => None,
        }
    }
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

//! 서버, 데이터베이스, 환경 관련 설정
//!
//! 모든 값은 [`AppConfig::from_env`](super::AppConfig::from_env)에서 시작 시점에
//! 한 번만 읽습니다. 각 `load` 함수는 환경 변수 조회 함수를 인자로 받으므로
//! 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap`으로 대체할 수 있습니다.

use std::str::FromStr;

use crate::core::errors::{AppError, AppResult};

use super::Lookup;

/// 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값을 해석합니다. 설정되지 않았거나 알 수 없는 값은 프로덕션입니다.
    pub fn load(lookup: Lookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 5xx 응답에 원본 메시지와 상세 정보를 담아도 되는 환경인지 여부
    ///
    /// 스테이징은 프로덕션과 같은 기준으로 마스킹합니다.
    pub fn exposes_internal_errors(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 비밀번호 해시 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 4-15 범위를 벗어나거나 숫자가 아니면 환경별 기본값을 사용합니다.
    pub fn load(lookup: Lookup<'_>, environment: Environment) -> Self {
        let default_cost = Self::bcrypt_cost_for_env(environment);

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            None => default_cost,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => cost,
                _ => {
                    log::warn!(
                        "BCRYPT_COST '{}' 은(는) 4-15 범위의 숫자가 아닙니다. 기본값 {} 사용",
                        raw,
                        default_cost
                    );
                    default_cost
                }
            },
        };

        Self { bcrypt_cost }
    }

    pub fn bcrypt_cost_for_env(env: Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn load(lookup: Lookup<'_>) -> AppResult<Self> {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup, "PORT", 8080)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 관계형 저장소 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn load(lookup: Lookup<'_>) -> AppResult<Self> {
        let max_connections = parse_or(lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(AppError::ConfigError(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://productos.db?mode=rwc".to_string()),
            max_connections,
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn load(lookup: Lookup<'_>) -> AppResult<Self> {
        Ok(Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100)?,
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
        })
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// 쉼표로 구분된 `CORS_ALLOWED_ORIGINS`. 기본값은 Angular 개발 서버입니다.
    pub fn load(lookup: Lookup<'_>) -> Self {
        let raw = lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "http://localhost:4200".to_string());

        Self {
            allowed_origins: raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// 값이 없으면 기본값, 형식이 잘못되었으면 설정 에러
pub(super) fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::ConfigError(format!("{} '{}' 파싱 실패: {}", key, raw, e))),
    }
}

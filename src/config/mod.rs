//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 시작 시점에 [`AppConfig`]로 한 번만 읽고,
//! 이후에는 [`AppState`](crate::state::AppState)를 통해 필요한 컴포넌트에 주입합니다.
//! 요청 처리 중에 환경 변수를 직접 읽는 코드는 없습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, Rate Limiting, CORS 설정
//! - [`auth_config`] - JWT, 관리자 계정 시드 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (스테이징/프로덕션)
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"       # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export DATABASE_URL="sqlite://productos.db?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//! export JWT_ISSUER="productos-api"
//! export JWT_AUDIENCE="productos-app"
//! export JWT_EXPIRE_MINUTES="60"
//! export BCRYPT_COST="12"               # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:4200"
//! export SEED_ADMIN_EMAIL="admin@example.com"
//! export SEED_ADMIN_PASSWORD="change-me"
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;

use crate::core::errors::AppResult;

/// 환경 변수 조회 함수
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub seed: Option<SeedConfig>,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> AppResult<Self> {
        let environment = Environment::load(lookup);

        Ok(Self {
            environment,
            server: ServerConfig::load(lookup)?,
            database: DatabaseConfig::load(lookup)?,
            jwt: JwtConfig::load(lookup, environment)?,
            password: PasswordConfig::load(lookup, environment),
            rate_limit: RateLimitConfig::load(lookup)?,
            cors: CorsConfig::load(lookup),
            seed: SeedConfig::load(lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::errors::AppError;

    #[test]
    fn test_test_environment_loads_with_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([("ENVIRONMENT", "test")]);
        let config = AppConfig::from_lookup(&|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.password.bcrypt_cost, 4);
        assert_eq!(config.rate_limit.per_second, 100);
        assert_eq!(config.rate_limit.burst_size, 200);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:4200"]);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_production_without_secret_fails() {
        let result = AppConfig::from_lookup(&|_| None);

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}

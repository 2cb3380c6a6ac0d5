//! HTTP 앱 조립
//!
//! `main`과 테스트가 같은 미들웨어 스택을 쓰도록 앱 구성을 한곳에 둡니다.
//!
//! actix는 마지막에 등록한 `wrap`이 가장 바깥에서 실행됩니다. 바깥부터:
//!
//! 1. 경로 정규화
//! 2. CORS: 결함 변환기가 만든 에러 응답과 429 응답에도 CORS 헤더를 붙입니다.
//! 3. 요청 로그
//! 4. 결함 변환기
//! 5. Rate Limiting

use actix_cors::Cors;
use actix_governor::governor::middleware::StateInformationMiddleware;
use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{middleware, App, Error};

use crate::config::{CorsConfig, RateLimitConfig};
use crate::core::errors::{AppError, AppResult};
use crate::middlewares::FaultTranslator;
use crate::routes::configure_all_routes;
use crate::state::AppState;

/// IP별 Rate Limiting 설정 (`x-ratelimit-*` 헤더 포함)
pub type RateLimiter = GovernorConfig<PeerIpKeyExtractor, StateInformationMiddleware>;

/// 제한기 상태는 설정 값이 공유하므로, 워커마다 같은 값을 복제해 써야 제한이 프로세스 전체에 적용됩니다.
pub fn rate_limiter(config: &RateLimitConfig) -> AppResult<RateLimiter> {
    if config.per_second == 0 || config.burst_size == 0 {
        return Err(AppError::ConfigError(
            "RATE_LIMIT_PER_SECOND와 RATE_LIMIT_BURST_SIZE는 0보다 커야 합니다".to_string(),
        ));
    }

    GovernorConfigBuilder::default()
        .requests_per_second(config.per_second)
        .burst_size(config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| AppError::ConfigError("Rate Limiting 설정을 만들 수 없습니다".to_string()))
}

/// 허용 Origin은 `CORS_ALLOWED_ORIGINS` 설정을 따릅니다.
pub fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])
        .supports_credentials()
        .max_age(3600)
}

pub fn build_app(
    state: AppState,
    rate_limiter: RateLimiter,
    cors: CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let environment = state.environment;

    App::new()
        .wrap(Governor::new(&rate_limiter))
        .wrap(FaultTranslator::new(environment))
        .wrap(middleware::Logger::default())
        .wrap(configure_cors(&cors))
        .wrap(middleware::NormalizePath::trim())
        .configure(move |cfg| {
            state.register(cfg);
            configure_all_routes(cfg);
        })
}

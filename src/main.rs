//! 상품 관리 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 설정을 읽고, SQLite 연결과 스키마를 준비한 뒤 REST API를 제공합니다.

use std::io;

use actix_web::HttpServer;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use productos_api::config::AppConfig;
use productos_api::core::errors::AppError;
use productos_api::db::Database;
use productos_api::server::{build_app, rate_limiter};
use productos_api::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 상품 관리 API 시작중...");

    let config = AppConfig::from_env().map_err(startup_error)?;
    info!("실행 환경: {}", config.environment.as_str());

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database).await.map_err(startup_error)?;
    database.ensure_schema().await.map_err(startup_error)?;

    let state = AppState::new(&config, database);

    if let Some(seed) = &config.seed {
        state.users.ensure_seed_account(seed).await.map_err(startup_error)?;
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서는 [`build_app`]을 따릅니다. 바깥부터 경로 정규화 → CORS → 요청 로그 →
/// 결함 변환기 → Rate Limiting입니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/producto", bind_address);

    let limiter = rate_limiter(&config.rate_limit).map_err(startup_error)?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let cors_config = config.cors;

    HttpServer::new(move || build_app(state.clone(), limiter.clone(), cors_config.clone()))
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 stderr로 남깁니다.
    match loaded {
        Ok(file) => eprintln!("Current profile: {} ({} 파일 로드 됨)", profile, file),
        Err(e) => eprintln!("Current profile: {} (env 파일 로드 실패: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn startup_error(e: AppError) -> io::Error {
    error!("시작 실패: {}", e);
    io::Error::other(e.to_string())
}

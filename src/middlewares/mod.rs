//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인의 횡단 관심사를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ### 2. 결함 변환기 (FaultTranslator)
//! - 처리되지 않은 에러와 패닉을 `ErrorDetails` 응답으로 변환
//! - 운영 환경에서 5xx 상세 정보 마스킹
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .wrap(FaultTranslator::new(config.environment))
//!     .service(
//!         web::scope("/api/producto")
//!             .wrap(AuthMiddleware::optional()) // 읽기는 익명 허용
//!             .service(handlers::products::create_product)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod fault_translator;

pub use auth_middleware::AuthMiddleware;
pub use fault_translator::FaultTranslator;

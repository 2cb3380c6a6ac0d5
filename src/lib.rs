//! 상품 관리 API 백엔드
//!
//! 상품 카탈로그 CRUD와 이메일/비밀번호 로그인을 제공하는 REST API입니다.
//! Angular 관리 화면이 클라이언트입니다.
//!
//! # Features
//!
//! - **상품 관리**: 조회, 이름 검색, 가격 범위 조회, 생성/수정/삭제
//! - **결과 엔벨로프**: 서비스 결과를 `ApiResult` / `ApiResultList`로 통일
//! - **Unit of Work**: 요청마다 하나의 트랜잭션, 드롭 시 롤백
//! - **낙관적 동시성**: 버전 컬럼 기반 충돌 감지 (409)
//! - **JWT 인증**: HS256 Bearer 토큰, 쓰기 작업에만 요구
//! - **결함 변환기**: 처리되지 않은 에러/패닉을 `ErrorDetails`로 변환, 운영 환경 마스킹
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 엔벨로프 → HTTP 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 + 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Unit of Work   │ ← 트랜잭션 + 리포지토리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소 (sqlx)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use productos_api::config::AppConfig;
//! use productos_api::db::Database;
//! use productos_api::state::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let db = Database::connect(&config.database).await?;
//! let state = AppState::new(&config, db);
//! let products = state.products.get_all().await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

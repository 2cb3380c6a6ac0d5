//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 컨트롤러 계층으로서 라우트를 서비스 호출에 연결하고, 서비스가 돌려준
//! 엔벨로프를 HTTP 응답으로 옮기는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Angular 관리 화면, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 + 엔벨로프                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UnitOfWork / Repositories - 데이터 접근         ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 변환 규칙
//!
//! 모든 핸들러는 같은 규칙 하나만 따릅니다.
//!
//! - 성공 엔벨로프 → 페이로드 JSON + 엔벨로프의 상태 코드 (204는 본문 없음)
//! - 실패 엔벨로프 → [`ErrorDetails`](crate::domain::ErrorDetails) JSON + 엔벨로프의 상태 코드
//! - `Err(AppError)` → `?`로 전파되어 [`FaultTranslator`](crate::middlewares::FaultTranslator)가 처리
//!
//! ## 모듈 구성
//!
//! - **`products`**: 상품 CRUD, 이름 검색, 가격 범위 조회 (`/api/producto`)
//! - **`auth`**: 로그인, 현재 사용자 조회 (`/api/auth`)
//! - **`health`**: 헬스체크 (`/health`)

pub mod auth;
pub mod health;
pub mod products;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::envelope::{ApiResult, ApiResultList};

/// 서비스 엔벨로프를 HTTP 응답으로 변환합니다.
pub trait IntoHttpResponse {
    fn into_http_response(self) -> HttpResponse;
}

impl<T: Serialize> IntoHttpResponse for ApiResult<T> {
    fn into_http_response(self) -> HttpResponse {
        match self.into_parts() {
            Ok((_, status)) if status == StatusCode::NO_CONTENT => HttpResponse::NoContent().finish(),
            Ok((data, status)) => HttpResponse::build(status).json(data),
            Err(details) => details.to_response(),
        }
    }
}

impl<T: Serialize> IntoHttpResponse for ApiResultList<T> {
    fn into_http_response(self) -> HttpResponse {
        match self.into_parts() {
            Ok((page, status)) => HttpResponse::build(status).json(page),
            Err(details) => details.to_response(),
        }
    }
}

//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 상품/사용자 엔티티와 요청 처리 파이프라인
//! 전체가 공유하는 결과 타입을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities       - 영속 엔티티 (Product, User) + Entity 메타데이터 trait
//! ├── dto            - 데이터 전송 객체 (Request/Response)
//! ├── models         - 인증 관련 값 객체 (TokenClaims, AuthenticatedUser)
//! ├── envelope       - ApiResult / ApiResultList 서비스 결과 엔벨로프
//! └── error_details  - 구조화된 에러 응답 본문
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, UnitOfWork, DB)
//! ```
//!
//! ## 요청 처리 흐름에서의 역할
//!
//! 1. 핸들러가 요청 DTO를 역직렬화합니다.
//! 2. 서비스가 DTO를 검증하고 엔티티로 변환하여 리포지토리에 전달합니다.
//! 3. 서비스는 결과를 엔벨로프에 담아 반환합니다.
//! 4. 핸들러는 엔벨로프의 상태 코드로 응답을 만들고, 실패라면
//!    [`ErrorDetails`] 본문을 사용합니다.

pub mod dto;
pub mod entities;
pub mod envelope;
pub mod error_details;
pub mod models;

pub use dto::*;
pub use entities::*;
pub use envelope::{ApiResult, ApiResultList, Page};
pub use error_details::ErrorDetails;
pub use models::*;

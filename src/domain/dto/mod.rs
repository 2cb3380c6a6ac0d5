//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트(Angular 관리 화면)와 서버 간의 데이터 계약을 명확히 정의합니다.
//!
//! | 역할 | 이 시스템 |
//! |------|-----------|
//! | HTTP 요청 본문/쿼리 매핑 | `request` 모듈 |
//! | HTTP 응답 본문 매핑 | `response` 모듈 |
//! | 입력값 유효성 검증 | `validator` crate |
//! | JSON 필드 매핑 | `serde` annotations |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── products/
//! │   └── request.rs      # ProductRequest, NameSearchQuery, PriceRangeQuery
//! └── users/
//!     ├── request/        # LoginRequest
//!     └── response/       # UserResponse, LoginResponse
//! ```
//!
//! 상품 응답은 엔티티 [`Product`](crate::domain::entities::Product)를 그대로
//! 직렬화합니다. 사용자 엔티티는 비밀번호 해시를 포함하므로 항상
//! [`UserResponse`](users::UserResponse)로 변환한 뒤 내보냅니다.

pub mod products;
pub mod users;

pub use products::*;
pub use users::*;

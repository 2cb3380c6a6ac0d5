//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스 연산은 `AppResult<ApiResult<T>>` 또는 `AppResult<ApiResultList<T>>`를
//! 반환합니다.
//!
//! - 예상된 비즈니스 결과(검증 실패, 리소스 없음, ID 불일치, 버전 충돌,
//!   잘못된 자격 증명)는 `Ok` 안의 실패 엔벨로프입니다.
//! - 저장소 장애처럼 예상하지 못한 실패만 `Err(AppError)`로 전파되어
//!   결함 변환기에서 500 응답이 됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::products::ProductService;
//!
//! let service = ProductService::new(db.clone());
//! let result = service.get_by_id(3).await?;
//! if !result.is_success() {
//!     log::warn!("{:?}", result.error());
//! }
//! ```

pub mod auth;
pub mod products;
pub mod users;

//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 에러 처리 체계를 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **FaultKind**: 상태 코드와 `exceptionType` 라벨을 결정하는 결함 분류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러에 컨텍스트를 붙여 변환
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn load(id: i64) -> AppResult<Product> {
//!     let mut uow = UnitOfWork::begin(&db).await?;
//!     uow.products()
//!         .get_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("No se encontró el producto con ID: {}", id)))
//! }
//! ```

pub mod errors;

pub use errors::*;

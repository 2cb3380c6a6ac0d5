//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 제네릭 [`Repository<T>`] trait과 엔티티별 확장 trait,
//! 그리고 이들을 하나의 트랜잭션으로 묶는 [`UnitOfWork`]를 제공합니다.
//!
//! # Features
//!
//! - 엔티티 메타데이터([`Entity`](crate::domain::entities::Entity))만으로 동작하는 단일 SQL 구현
//! - 확장 trait을 통한 엔티티별 조회 (상속 없이 기능 조합)
//! - 버전 컬럼 기반 낙관적 동시성 제어
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{ProductRepository, Repository, UnitOfWork};
//!
//! let mut uow = UnitOfWork::begin(&db).await?;
//! let widgets = uow.products().find_by_name("Widget").await?;
//! ```

pub mod products;
pub mod repository;
pub mod unit_of_work;
pub mod users;

pub use products::ProductRepository;
pub use repository::{Repository, SqlRepository};
pub use unit_of_work::UnitOfWork;
pub use users::UserRepository;

//! # Domain Entities
//!
//! 관계형 저장소에 영속되는 도메인 엔티티와, 제네릭 리포지토리가
//! 엔티티를 다루기 위해 필요한 메타데이터 trait [`Entity`]를 정의합니다.
//!
//! ## 엔티티 목록
//!
//! | 엔티티 | 테이블 | 식별자 컬럼 |
//! |--------|--------|-------------|
//! | [`Product`](products::Product) | `productos` | `producto_id` |
//! | [`User`](users::User) | `usuarios` | `usuario_id` |
//!
//! 모든 엔티티는 저장소가 부여하는 정수 식별자와 낙관적 동시성 제어용
//! `version` 컬럼을 가집니다.

use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

pub mod products;
pub mod users;

/// 바인딩 파라미터를 누적하는 SQLite 쿼리 타입
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// 제네릭 리포지토리가 사용하는 영속 엔티티 메타데이터
///
/// 테이블 이름, 식별자 컬럼, 쓰기 가능한 컬럼 목록을 상수로 제공하고,
/// [`bind_columns`](Entity::bind_columns)는 `COLUMNS`와 **같은 순서로**
/// 값을 바인딩해야 합니다.
///
/// ```rust,ignore
/// impl Entity for Product {
///     const TABLE: &'static str = "productos";
///     const ID_COLUMN: &'static str = "producto_id";
///     const COLUMNS: &'static [&'static str] = &["nombre", "precio", "cantidad"];
///     // ...
/// }
/// ```
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// 식별자와 `version`을 제외한 쓰기 가능한 컬럼
    const COLUMNS: &'static [&'static str];

    /// 저장소가 부여한 식별자. 아직 저장되지 않았다면 `None`입니다.
    fn id(&self) -> Option<i64>;

    fn assign_id(&mut self, id: i64);

    fn version(&self) -> i64;

    fn assign_version(&mut self, version: i64);

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

pub use products::Product;
pub use users::User;

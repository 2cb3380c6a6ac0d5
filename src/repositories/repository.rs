//! # 제네릭 리포지토리
//!
//! [`Entity`]를 구현한 모든 엔티티에 대해 공통 CRUD 연산을 제공합니다.
//! 엔티티별 조회(이름 검색, 가격 범위, 자격 증명)는
//! [`ProductRepository`](super::products::ProductRepository),
//! [`UserRepository`](super::users::UserRepository) 확장 trait이 담당합니다.
//!
//! 리포지토리는 커넥션을 소유하지 않고
//! [`UnitOfWork`](super::UnitOfWork)의 트랜잭션을 빌려 씁니다. 따라서 모든 쓰기는
//! 유닛 오브 워크가 커밋하기 전까지 다른 요청에 보이지 않습니다.
//!
//! ## 낙관적 동시성 제어
//!
//! `update`는 `WHERE <id> = ? AND version = ?` 조건으로 실행되며, 성공하면
//! 버전을 1 증가시킵니다. 다른 요청이 먼저 수정했다면 영향받은 행이 없으므로
//! `Ok(false)`를 반환합니다.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::SqliteConnection;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Entity;

/// 엔티티 공통 CRUD 연산
#[async_trait]
pub trait Repository<T: Entity>: Send {
    /// ID로 조회합니다. 없으면 `Ok(None)`이며 에러가 아닙니다.
    async fn get_by_id(&mut self, id: i64) -> AppResult<Option<T>>;

    /// 전체 목록 (식별자 순)
    async fn get_all(&mut self) -> AppResult<Vec<T>>;

    /// 새 엔티티를 저장하고, 부여된 식별자와 버전 1이 채워진 엔티티를 반환합니다.
    async fn add(&mut self, entity: T) -> AppResult<T>;

    /// 전체 컬럼을 덮어씁니다. 식별자와 버전이 일치하는 행이 없으면 `Ok(false)`.
    async fn update(&mut self, entity: &mut T) -> AppResult<bool>;

    /// 행을 삭제합니다. 삭제된 행이 없으면 `Ok(false)`.
    async fn delete(&mut self, entity: &T) -> AppResult<bool>;
}

/// 트랜잭션 커넥션을 빌려 쓰는 SQL 리포지토리
pub struct SqlRepository<'c, T> {
    conn: &'c mut SqliteConnection,
    _entity: PhantomData<fn() -> T>,
}

impl<'c, T: Entity> SqlRepository<'c, T> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// 확장 trait 구현에서 사용하는 커넥션
    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut *self.conn
    }

    /// `SELECT <id>, <columns>, version FROM <table>`
    pub(crate) fn select_clause() -> String {
        format!(
            "SELECT {}, {}, version FROM {}",
            T::ID_COLUMN,
            T::COLUMNS.join(", "),
            T::TABLE
        )
    }
}

/// 유니크 제약 위반은 충돌, 그 밖의 쓰기 실패는 저장소 장애로 분류합니다.
fn write_error(error: sqlx::Error) -> AppError {
    match error.as_database_error() {
        Some(db_error) if db_error.is_unique_violation() => {
            AppError::ConflictError("Ya existe un registro con los mismos datos".to_string())
        }
        _ => error.into(),
    }
}

#[async_trait]
impl<'c, T: Entity> Repository<T> for SqlRepository<'c, T> {
    async fn get_by_id(&mut self, id: i64) -> AppResult<Option<T>> {
        let sql = format!("{} WHERE {} = ?", Self::select_clause(), T::ID_COLUMN);

        let entity = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(entity)
    }

    async fn get_all(&mut self) -> AppResult<Vec<T>> {
        let sql = format!("{} ORDER BY {}", Self::select_clause(), T::ID_COLUMN);

        let entities = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(entities)
    }

    async fn add(&mut self, mut entity: T) -> AppResult<T> {
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}, version) VALUES ({}, 1)",
            T::TABLE,
            T::COLUMNS.join(", "),
            placeholders
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .execute(&mut *self.conn)
            .await
            .map_err(write_error)?;

        entity.assign_id(result.last_insert_rowid());
        entity.assign_version(1);

        log::debug!("{} 행 추가: id={}", T::TABLE, result.last_insert_rowid());
        Ok(entity)
    }

    async fn update(&mut self, entity: &mut T) -> AppResult<bool> {
        let Some(id) = entity.id() else {
            return Ok(false);
        };
        let expected_version = entity.version();

        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {}, version = version + 1 WHERE {} = ? AND version = ?",
            T::TABLE,
            assignments,
            T::ID_COLUMN
        );

        let result = entity
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .bind(expected_version)
            .execute(&mut *self.conn)
            .await
            .map_err(write_error)?;

        if result.rows_affected() == 0 {
            log::debug!(
                "{} 행 수정 실패: id={}, 기대 버전={}",
                T::TABLE,
                id,
                expected_version
            );
            return Ok(false);
        }

        entity.assign_version(expected_version + 1);
        Ok(true)
    }

    async fn delete(&mut self, entity: &T) -> AppResult<bool> {
        let Some(id) = entity.id() else {
            return Ok(false);
        };
        let sql = format!("DELETE FROM {} WHERE {} = ?", T::TABLE, T::ID_COLUMN);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! # Unit of Work
//!
//! 하나의 트랜잭션을 공유하는 리포지토리 묶음입니다.
//!
//! - 요청마다 [`UnitOfWork::begin`]으로 새 트랜잭션을 엽니다. 요청 간에 공유하지 않습니다.
//! - 읽은 뒤 쓰는 연산은 [`UnitOfWork::begin_write`]로 시작합니다. `BEGIN IMMEDIATE`로
//!   쓰기 잠금을 먼저 잡으므로 동시에 들어온 쓰기는 `busy_timeout` 동안 순서대로 대기하고,
//!   뒤에 실행된 쪽은 앞선 커밋이 반영된 행을 읽습니다.
//! - [`products`](UnitOfWork::products), [`users`](UnitOfWork::users)가 돌려주는
//!   리포지토리는 모두 같은 트랜잭션에서 동작합니다.
//! - [`complete`](UnitOfWork::complete)가 변경 사항을 원자적으로 커밋합니다.
//! - `complete` 없이 스코프를 벗어나면(에러 전파, 클라이언트 연결 종료로 인한
//!   핸들러 future drop 포함) sqlx 트랜잭션이 롤백되고 커넥션은 풀로 돌아갑니다.
//!
//! ```rust,ignore
//! let mut uow = UnitOfWork::begin_write(&db).await?;
//! let product = uow.products().add(Product::new("Widget", 9.99, 5)).await?;
//! uow.complete().await?;
//! ```

use sqlx::{Sqlite, Transaction};

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::{Product, User};
use crate::repositories::products::ProductRepository;
use crate::repositories::repository::SqlRepository;
use crate::repositories::users::UserRepository;

pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub async fn begin(db: &Database) -> AppResult<Self> {
        let tx = db.pool().begin().await?;
        Ok(Self { tx })
    }

    /// 쓰기 잠금을 즉시 획득하는 트랜잭션. 잠금을 기다리다 `busy_timeout`을 넘기면
    /// 저장소 에러가 됩니다.
    pub async fn begin_write(db: &Database) -> AppResult<Self> {
        let tx = db.pool().begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    pub fn products(&mut self) -> impl ProductRepository + '_ {
        SqlRepository::<Product>::new(&mut *self.tx)
    }

    pub fn users(&mut self) -> impl UserRepository + '_ {
        SqlRepository::<User>::new(&mut *self.tx)
    }

    /// 스테이징된 모든 변경을 커밋합니다.
    pub async fn complete(self) -> AppResult<()> {
        self.tx.commit().await?;
        log::debug!("유닛 오브 워크 커밋 완료");
        Ok(())
    }
}

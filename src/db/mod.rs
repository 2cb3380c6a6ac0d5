//! 관계형 저장소 연결
//!
//! sqlx `SqlitePool`을 감싸는 [`Database`] 핸들입니다. 풀은 내부적으로
//! 참조 카운트를 가지므로 `Clone`은 저렴하며, 요청마다
//! [`UnitOfWork`](crate::repositories::UnitOfWork)가 풀에서 트랜잭션을 엽니다.

use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};

const SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS productos (
        producto_id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        precio REAL NOT NULL,
        cantidad INTEGER NOT NULL DEFAULT 0,
        version INTEGER NOT NULL DEFAULT 1
    )",
    "CREATE TABLE IF NOT EXISTS usuarios (
        usuario_id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 1
    )",
];

#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 설정된 URL로 연결 풀을 만듭니다. 파일이 없으면 생성합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| AppError::ConfigError(format!("DATABASE_URL 형식 오류: {}", e)))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        info!("✅ 데이터베이스 연결 성공: {}", config.url);

        Ok(Self { pool })
    }

    /// 메모리 데이터베이스 (테스트용)
    ///
    /// SQLite 메모리 DB는 연결마다 독립적이므로 연결 하나를 끝까지 유지합니다.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 테이블이 없으면 생성합니다.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// 연결 상태 확인 (`SELECT 1`)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ping().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

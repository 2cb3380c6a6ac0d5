//! 테스트 공용 헬퍼
//!
//! 대부분의 테스트는 연결 하나짜리 메모리 SQLite를 사용하므로 외부 서비스가 필요 없습니다.
//! 여러 연결이 동시에 쓰는 경우만 임시 디렉터리의 파일 데이터베이스를 씁니다.

use std::collections::HashMap;

use tempfile::TempDir;

use crate::config::{AppConfig, DatabaseConfig, JwtConfig};
use crate::db::Database;
use crate::domain::entities::User;
use crate::state::AppState;

pub const TEST_SECRET: &str = "productos-api-test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Admin123";

/// 스키마가 준비된 빈 메모리 데이터베이스
pub async fn memory_database() -> Database {
    let db = Database::in_memory().await.expect("memory database");
    db.ensure_schema().await.expect("schema");
    db
}

/// 연결 풀이 여러 개인 파일 데이터베이스. `TempDir`이 살아 있는 동안만 유효합니다.
pub async fn file_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("productos.db").display()),
        max_connections: 5,
    };

    let db = Database::connect(&config).await.expect("file database");
    db.ensure_schema().await.expect("schema");
    (dir, db)
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: "productos-api".to_string(),
        audience: "productos-app".to_string(),
        expire_minutes: 60,
    }
}

/// `ENVIRONMENT` 값만 바꾼 설정 (bcrypt cost는 항상 4)
pub fn test_config(environment: &str) -> AppConfig {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ENVIRONMENT", environment),
        ("JWT_SECRET", TEST_SECRET),
        ("BCRYPT_COST", "4"),
    ]);

    AppConfig::from_lookup(&|key| vars.get(key).map(|v| v.to_string())).expect("test config")
}

pub async fn test_state(environment: &str) -> AppState {
    AppState::new(&test_config(environment), memory_database().await)
}

/// 관리자 계정을 등록하고 그 계정의 Bearer 토큰을 반환합니다.
pub async fn admin_token(state: &AppState) -> String {
    let registered = state
        .users
        .register(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("register admin");
    let user_id = registered.data().expect("admin account").id;

    let mut user = User::new(ADMIN_EMAIL, "");
    user.id = Some(user_id);
    state.tokens.issue(&user).expect("issue token").token
}

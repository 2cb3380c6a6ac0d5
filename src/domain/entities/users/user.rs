//! User Entity Implementation
//!
//! 로그인 계정 엔티티입니다. 비밀번호는 bcrypt 해시로만 저장되며,
//! 엔티티 자체는 직렬화하지 않습니다. 응답에는
//! [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 사용합니다.

use super::super::{Entity, SqliteQuery};

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    #[sqlx(rename = "usuario_id")]
    pub id: Option<i64>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub version: i64,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            password_hash: password_hash.into(),
            version: 1,
        }
    }
}

impl Entity for User {
    const TABLE: &'static str = "usuarios";
    const ID_COLUMN: &'static str = "usuario_id";
    const COLUMNS: &'static [&'static str] = &["email", "password_hash"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn assign_version(&mut self, version: i64) {
        self.version = version;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
    }
}

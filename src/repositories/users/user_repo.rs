//! # 사용자 리포지토리
//!
//! 제네릭 CRUD에 이메일 조회와 자격 증명 확인을 더한 확장 trait입니다.
//!
//! ## 자격 증명 확인
//!
//! 비밀번호는 bcrypt 해시로만 저장되므로 SQL에서 비밀번호를 비교하지 않습니다.
//! 이메일로 한 행을 찾은 뒤 [`PasswordHasher::verify`]로 해시를 검증합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::User;
use crate::repositories::repository::{Repository, SqlRepository};
use crate::services::auth::PasswordHasher;

#[async_trait]
pub trait UserRepository: Repository<User> {
    /// 이메일이 정확히 일치하는 사용자
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<User>>;

    /// 이메일이 일치하고 비밀번호가 해시와 맞는 사용자. 둘 중 하나라도 아니면 `None`.
    async fn find_by_credentials(&mut self, email: &str, password: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl<'c> UserRepository for SqlRepository<'c, User> {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<User>> {
        let sql = format!("{} WHERE email = ? LIMIT 1", Self::select_clause());

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.connection())
            .await?;

        Ok(user)
    }

    async fn find_by_credentials(&mut self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };

        if PasswordHasher::verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

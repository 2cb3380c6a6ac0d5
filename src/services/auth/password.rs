//! bcrypt 기반 비밀번호 해시
//!
//! 솔트는 bcrypt가 해시마다 자동으로 생성합니다. cost는 환경별 설정
//! ([`PasswordConfig`](crate::config::PasswordConfig))을 따릅니다.

use crate::core::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    /// 평문 비밀번호가 저장된 해시와 일치하는지 확인합니다.
    ///
    /// 해시 형식이 잘못된 경우는 불일치가 아니라 내부 에러입니다.
    pub fn verify(password: &str, password_hash: &str) -> AppResult<bool> {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, password_hash).context("비밀번호 검증 실패")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}

//! JWT 클레임과 발급 결과
//!
//! RFC 7519 표준 클레임으로만 구성되며, 개인정보 보호를 위해 최소한의
//! 정보(사용자 ID, 이메일)만 포함합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID, 문자열)
/// - `email`: 사용자 이메일
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iss` / `aud`: 발급자와 대상 (설정값과 일치해야 검증 통과)
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `sub` 클레임을 사용자 ID로 해석합니다.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// 발급된 액세스 토큰
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

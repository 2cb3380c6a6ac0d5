use serde::{Deserialize, Serialize};

use super::user_response::UserResponse;
use crate::domain::models::token::IssuedToken;

/// 로그인 성공 응답
///
/// ```json
/// {
///   "user": { "usuarioId": 1, "email": "admin@example.com" },
///   "token": "eyJ...",
///   "tokenType": "Bearer",
///   "expiresIn": 3600
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
    pub token_type: String,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(user: UserResponse, issued: IssuedToken) -> Self {
        Self {
            user,
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
        }
    }
}

//! Authentication HTTP Handlers
//!
//! 이메일/비밀번호 로그인과 현재 사용자 조회를 처리합니다.
//!
//! - `POST /api/auth/login`: 자격 증명 확인 후 Bearer 토큰 발급 (실패 시 401)
//! - `GET /api/auth/me`: 토큰의 사용자 정보 (`Required` 인증 스코프)
use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::LoginRequest;
use crate::domain::models::AuthenticatedUser;
use crate::handlers::IntoHttpResponse;
use crate::services::users::UserService;

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// ```json
/// { "email": "admin@example.com", "password": "secret" }
/// ```
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("로컬 로그인 시도 - 사용자: {}", payload.email);

    let result = service.login(payload.into_inner()).await?;
    Ok(result.into_http_response())
}

/// 현재 인증된 사용자 정보
///
/// # Endpoint
/// `GET /api/auth/me`
#[get("")]
pub async fn get_current_user(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = service.get_by_id(user.user_id).await?;
    Ok(result.into_http_response())
}

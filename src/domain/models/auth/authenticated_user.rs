use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 유효한 Bearer 토큰을
/// 확인한 뒤 요청 extensions에 넣어 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 정보가 없으면 401 응답이 됩니다. 상품 생성/수정/삭제 핸들러가
/// 이 추출자를 인자로 받아 쓰기 작업에 인증을 요구합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Se requiere un token de acceso válido".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser {
            user_id: 7,
            email: "admin@example.com".to_string(),
        });

        let user = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(user.user_id, 7);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let error = AuthenticatedUser::extract(&req).await.unwrap_err();

        assert!(matches!(error, AppError::AuthenticationError(_)));
    }
}

//! 로그인 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 이메일/비밀번호 로그인 요청
///
/// ```json
/// { "email": "admin@example.com", "password": "secret" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "El email no tiene un formato válido"))]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = LoginRequest {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = invalid.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 2);
    }
}

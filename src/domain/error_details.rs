//! 구조화된 에러 응답 본문
//!
//! 모든 실패 응답(엔벨로프 실패, 전파된 `AppError`, actix 내부 에러, 패닉)은
//! 같은 JSON 형식으로 직렬화됩니다.
//!
//! ```json
//! {
//!   "statusCode": 400,
//!   "message": "El nombre del producto es requerido",
//!   "exceptionType": "Validation Error",
//!   "stackTrace": null,
//!   "timestamp": "2024-01-01T12:00:00Z"
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{label_for_status, AppError, FaultKind};

/// 운영 환경에서 5xx 메시지 대신 노출하는 일반 메시지
pub const GENERIC_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub status_code: u16,
    pub message: String,
    pub exception_type: String,
    pub stack_trace: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorDetails {
    /// 결함 분류로부터 에러 본문을 만듭니다. 타임스탬프는 생성 시점입니다.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self::for_status(kind.status_code(), message)
    }

    /// 임의의 상태 코드로부터 에러 본문을 만듭니다.
    pub fn for_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            exception_type: label_for_status(status).to_string(),
            stack_trace: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// `AppError`를 에러 본문으로 변환합니다.
    ///
    /// 클라이언트 에러(4xx)의 메시지는 항상 노출합니다. 서버 에러(5xx)는
    /// `expose_internals`가 참일 때만 원본 메시지와 상세 정보를 담고,
    /// 그렇지 않으면 일반 메시지로 대체합니다.
    pub fn from_app_error(error: &AppError, expose_internals: bool) -> Self {
        let kind = error.kind();
        match kind {
            FaultKind::Internal if expose_internals => {
                Self::new(kind, error.message()).with_stack_trace(format!("{:?}", error))
            }
            FaultKind::Internal => Self::new(kind, GENERIC_SERVER_ERROR_MESSAGE),
            _ => Self::new(kind, error.message()),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self)
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status_code, self.exception_type, self.message)
    }
}

/// 이미 렌더링이 끝난 에러 본문을 `actix_web::Error`로 전달할 때 사용합니다.
impl ResponseError for ErrorDetails {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let details = ErrorDetails::new(FaultKind::Validation, "El nombre del producto es requerido");
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "El nombre del producto es requerido");
        assert_eq!(json["exceptionType"], "Validation Error");
        assert!(json["stackTrace"].is_null());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_internal_error_is_masked_without_exposure() {
        let error = AppError::DatabaseError("no such table: productos".to_string());
        let details = ErrorDetails::from_app_error(&error, false);

        assert_eq!(details.status_code, 500);
        assert_eq!(details.exception_type, "Server Error");
        assert_eq!(details.message, GENERIC_SERVER_ERROR_MESSAGE);
        assert!(details.stack_trace.is_none());
    }

    #[test]
    fn test_internal_error_is_exposed_in_development() {
        let error = AppError::DatabaseError("no such table: productos".to_string());
        let details = ErrorDetails::from_app_error(&error, true);

        assert_eq!(details.message, "no such table: productos");
        assert!(details.stack_trace.unwrap().contains("DatabaseError"));
    }

    #[test]
    fn test_client_error_message_is_never_masked() {
        let error = AppError::NotFound("No se encontró el producto con ID: 3".to_string());
        let details = ErrorDetails::from_app_error(&error, false);

        assert_eq!(details.status_code, 404);
        assert_eq!(details.exception_type, "Not Found");
        assert_eq!(details.message, "No se encontró el producto con ID: 3");
    }

    #[test]
    fn test_response_carries_status() {
        let response = ErrorDetails::new(FaultKind::Conflict, "conflicto").to_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}

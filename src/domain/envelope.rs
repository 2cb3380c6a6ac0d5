//! 서비스 결과 엔벨로프
//!
//! 서비스 계층의 모든 연산은 성공과 실패를 같은 타입으로 돌려줍니다.
//! 컨트롤러는 엔벨로프가 담고 있는 상태 코드를 그대로 응답에 옮기기만 합니다.
//!
//! - [`ApiResult<T>`]: 단일 페이로드 또는 에러 메시지 + 상태 코드
//! - [`ApiResultList<T>`]: 페이로드 목록 + 전체 레코드 수 또는 에러 메시지 + 상태 코드
//!
//! 두 타입 모두 생성자를 통해서만 만들 수 있으며, `data`와 `error` 중
//! 정확히 하나만 채워집니다.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::core::errors::FaultKind;
use crate::domain::error_details::ErrorDetails;

/// 단일 페이로드 엔벨로프
///
/// 직렬화 형식은 프론트엔드의 `ApiResult<T>` 모델과 같습니다
/// (`isSuccess`, `data`, `error`, `statusCode`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    is_success: bool,
    data: Option<T>,
    error: Option<String>,
    status_code: u16,
    #[serde(skip)]
    kind: Option<FaultKind>,
}

impl<T> ApiResult<T> {
    /// 200 OK 성공 결과
    pub fn success(data: T) -> Self {
        Self::success_with_status(data, StatusCode::OK)
    }

    /// 201 Created 성공 결과
    pub fn created(data: T) -> Self {
        Self::success_with_status(data, StatusCode::CREATED)
    }

    pub fn success_with_status(data: T, status: StatusCode) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            error: None,
            status_code: status.as_u16(),
            kind: None,
        }
    }

    /// 실패 결과. 상태 코드는 결함 분류에서 결정됩니다.
    pub fn failure(kind: FaultKind, error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            error: Some(error.into()),
            status_code: kind.status_code().as_u16(),
            kind: Some(kind),
        }
    }

    pub fn validation(error: impl Into<String>) -> Self {
        Self::failure(FaultKind::Validation, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::failure(FaultKind::NotFound, error)
    }

    pub fn conflict(error: impl Into<String>) -> Self {
        Self::failure(FaultKind::Conflict, error)
    }

    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self::failure(FaultKind::Unauthorized, error)
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn kind(&self) -> Option<FaultKind> {
        self.kind
    }

    /// 컨트롤러용 분해: 성공이면 (페이로드, 상태 코드), 실패면 에러 응답 본문.
    pub fn into_parts(self) -> Result<(T, StatusCode), ErrorDetails> {
        let status = self.status();
        match (self.data, self.error) {
            (Some(data), None) => Ok((data, status)),
            (_, error) => Err(ErrorDetails::for_status(
                status,
                error.unwrap_or_default(),
            )),
        }
    }
}

/// 목록 성공 응답 본문 (`{ data: [...], totalRecords: N }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_records: u64,
}

/// 목록 페이로드 엔벨로프
///
/// `total_records`는 반환된 목록의 길이와 독립적입니다. 페이지 단위로 잘린
/// 목록에서도 전체 개수를 전달할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResultList<T> {
    is_success: bool,
    data: Vec<T>,
    error: Option<String>,
    status_code: u16,
    total_records: u64,
    #[serde(skip)]
    kind: Option<FaultKind>,
}

impl<T> ApiResultList<T> {
    pub fn success(data: Vec<T>, total_records: u64) -> Self {
        Self {
            is_success: true,
            data,
            error: None,
            status_code: StatusCode::OK.as_u16(),
            total_records,
            kind: None,
        }
    }

    /// 전체 목록을 그대로 반환할 때 사용합니다. 레코드 수는 목록 길이입니다.
    pub fn from_all(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self::success(data, total)
    }

    pub fn failure(kind: FaultKind, error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: Vec::new(),
            error: Some(error.into()),
            status_code: kind.status_code().as_u16(),
            total_records: 0,
            kind: Some(kind),
        }
    }

    pub fn validation(error: impl Into<String>) -> Self {
        Self::failure(FaultKind::Validation, error)
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn kind(&self) -> Option<FaultKind> {
        self.kind
    }

    pub fn into_parts(self) -> Result<(Page<T>, StatusCode), ErrorDetails> {
        let status = self.status();
        match self.error {
            None => Ok((
                Page {
                    data: self.data,
                    total_records: self.total_records,
                },
                status,
            )),
            Some(error) => Err(ErrorDetails::for_status(status, error)),
        }
    }
}

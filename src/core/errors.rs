//! # Application Error Handling System
//!
//! 상품 관리 API 전역에서 사용하는 에러 분류 체계입니다.
//! 요청 처리 파이프라인(컨트롤러 → 서비스 → 유닛 오브 워크 → 리포지토리)의
//! 모든 계층이 같은 `AppError`를 공유하며, 최종적으로
//! [`FaultTranslator`](crate::middlewares::FaultTranslator)가
//! 구조화된 [`ErrorDetails`](crate::domain::ErrorDetails) 응답으로 변환합니다.
//!
//! ## 에러 전달 규칙
//!
//! - **예상된 비즈니스 결과** (검증 실패, 리소스 없음, ID 불일치, 버전 충돌)는
//!   서비스가 [`ApiResult`](crate::domain::ApiResult) 실패 엔벨로프로 반환합니다.
//! - **예상하지 못한 장애** (저장소 오류, 설정 오류 등)만 `Err(AppError)`로
//!   전파되어 가장 바깥의 결함 변환기에서 처리됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | exceptionType |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | `Validation Error` |
//! | `AuthenticationError` | 401 Unauthorized | `Unauthorized` |
//! | `AuthorizationError` | 403 Forbidden | `Forbidden` |
//! | `NotFound` | 404 Not Found | `Not Found` |
//! | `ConflictError` | 409 Conflict | `Conflict` |
//! | `DatabaseError` | 500 Internal Server Error | `Server Error` |
//! | `ConfigError` | 500 Internal Server Error | `Server Error` |
//! | `InternalError` | 500 Internal Server Error | `Server Error` |

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::error_details::ErrorDetails;

/// 결함 분류
///
/// 엔벨로프 실패와 `AppError`가 공통으로 사용하는 카테고리입니다.
/// 상태 코드와 응답 본문의 `exceptionType` 라벨을 한 곳에서 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl FaultKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FaultKind::Validation => StatusCode::BAD_REQUEST,
            FaultKind::Unauthorized => StatusCode::UNAUTHORIZED,
            FaultKind::Forbidden => StatusCode::FORBIDDEN,
            FaultKind::NotFound => StatusCode::NOT_FOUND,
            FaultKind::Conflict => StatusCode::CONFLICT,
            FaultKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn label(&self) -> &'static str {
        label_for_status(self.status_code())
    }
}

/// 상태 코드에 대응하는 `exceptionType` 라벨을 반환합니다.
///
/// `AppError`가 아닌 actix 내부 에러(JSON 파싱 실패, 경로 불일치 등)도
/// 같은 라벨 체계로 응답하기 위해 사용됩니다.
pub fn label_for_status(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Validation Error",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        429 => "Too Many Requests",
        400..=499 => "Client Error",
        _ => "Server Error",
    }
}

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`로 전파된 에러가 자동으로 HTTP 응답이 됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // sqlx 에러는 From 구현으로 자동 변환
/// let row = sqlx::query("SELECT 1").execute(&mut *conn).await?;
///
/// // 그 밖의 외부 에러는 ErrorContext로 컨텍스트 부여
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 연결 실패, 쿼리 오류, 트랜잭션 커밋 실패 등 저장소 계층의 모든 장애입니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌 에러 (409 Conflict)
    ///
    /// 중복 이메일 등록, 낙관적 동시성 버전 불일치 시 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 토큰 누락, 서명 불일치, 만료, 잘못된 자격 증명 등.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 설정 에러 (500 Internal Server Error)
    ///
    /// 시작 시점에 필수 환경 변수가 누락되었거나 형식이 잘못된 경우입니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러가 속하는 결함 분류를 반환합니다.
    pub fn kind(&self) -> FaultKind {
        match self {
            AppError::ValidationError(_) => FaultKind::Validation,
            AppError::NotFound(_) => FaultKind::NotFound,
            AppError::ConflictError(_) => FaultKind::Conflict,
            AppError::AuthenticationError(_) => FaultKind::Unauthorized,
            AppError::AuthorizationError(_) => FaultKind::Forbidden,
            AppError::DatabaseError(_) | AppError::ConfigError(_) | AppError::InternalError(_) => {
                FaultKind::Internal
            }
        }
    }

    /// 변형 접두어 없이 원본 메시지만 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 미들웨어가 없는 경로에서도 응답 형식이 유지되도록 운영 환경 기준
    /// (내부 정보 마스킹)으로 `ErrorDetails`를 만듭니다. 개발 환경의 상세 정보 노출은
    /// `FaultTranslator`가 환경 설정을 보고 다시 결정합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        ErrorDetails::from_app_error(self, false).to_response()
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let is_valid = bcrypt::verify(password, hash).context("비밀번호 검증 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

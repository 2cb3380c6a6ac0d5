//! 사용자 인증 DTO 모듈

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;

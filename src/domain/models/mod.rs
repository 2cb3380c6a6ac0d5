//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): 관계형 저장소에 저장되며 고유 식별자와 버전을 가짐
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ## 모듈 구성
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`auth`] | 인증된 사용자 정보, 인증 모드 |
//! | [`token`] | JWT 클레임, 발급된 토큰 |

pub mod auth;
pub mod token;

pub use auth::{AuthMode, AuthenticatedUser};
pub use token::{IssuedToken, TokenClaims};

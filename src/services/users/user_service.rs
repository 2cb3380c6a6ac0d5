//! # 사용자 인증 서비스
//!
//! 로그인(자격 증명 확인 + 토큰 발급), 계정 등록, 시작 시점 관리자 계정 생성을
//! 담당합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost, 해시마다 고유 솔트
//! - **에러 메시지 통합**: 존재하지 않는 이메일과 틀린 비밀번호를 구분하지 않고
//!   같은 401 메시지를 반환합니다.
//! - **민감 정보 제거**: 응답에는 [`UserResponse`]만 사용하며 비밀번호 해시는 나가지 않습니다.

use validator::Validate;

use crate::config::SeedConfig;
use crate::core::errors::{AppResult, FaultKind};
use crate::db::Database;
use crate::domain::dto::{LoginRequest, LoginResponse, UserResponse};
use crate::domain::entities::User;
use crate::domain::envelope::ApiResult;
use crate::repositories::{Repository, UnitOfWork, UserRepository};
use crate::services::auth::{PasswordHasher, TokenService};

const INVALID_CREDENTIALS_MESSAGE: &str = "La contraseña o el mail son incorrectos";

#[derive(Clone)]
pub struct UserService {
    db: Database,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl UserService {
    pub fn new(db: Database, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self { db, hasher, tokens }
    }

    /// 이메일/비밀번호가 일치하는 사용자를 찾습니다. 불일치는 항상 401입니다.
    pub async fn authenticate(&self, request: &LoginRequest) -> AppResult<ApiResult<User>> {
        if let Err(errors) = request.validate() {
            log::warn!("로그인 요청 검증 실패: {}", errors);
            return Ok(ApiResult::validation(first_message(&errors)));
        }

        let mut uow = UnitOfWork::begin(&self.db).await?;
        let user = uow
            .users()
            .find_by_credentials(&request.email, &request.password)
            .await?;

        match user {
            Some(user) => Ok(ApiResult::success(user)),
            None => {
                log::warn!("로그인 실패: {}", request.email);
                Ok(ApiResult::unauthorized(INVALID_CREDENTIALS_MESSAGE))
            }
        }
    }

    /// 인증에 성공하면 액세스 토큰을 발급합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<ApiResult<LoginResponse>> {
        let authenticated = self.authenticate(&request).await?;

        let Some(user) = authenticated.data() else {
            return Ok(ApiResult::failure(
                authenticated.kind().unwrap_or(FaultKind::Unauthorized),
                authenticated.error().unwrap_or(INVALID_CREDENTIALS_MESSAGE),
            ));
        };

        let issued = self.tokens.issue(user)?;
        log::info!("로그인 성공: {} (ID: {:?})", user.email, user.id);

        Ok(ApiResult::success(LoginResponse::new(
            UserResponse::from(user.clone()),
            issued,
        )))
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ApiResult<UserResponse>> {
        let mut uow = UnitOfWork::begin(&self.db).await?;

        match uow.users().get_by_id(id).await? {
            Some(user) => Ok(ApiResult::success(UserResponse::from(user))),
            None => Ok(ApiResult::not_found(format!(
                "No se encontró el usuario con ID: {}",
                id
            ))),
        }
    }

    /// 새 계정을 등록합니다. 이미 사용 중인 이메일은 409입니다.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<ApiResult<UserResponse>> {
        let password_hash = self.hasher.hash(password)?;
        let mut uow = UnitOfWork::begin_write(&self.db).await?;

        if uow.users().find_by_email(email).await?.is_some() {
            return Ok(ApiResult::conflict(format!(
                "Ya existe un usuario con el email: {}",
                email
            )));
        }

        let user = uow.users().add(User::new(email, password_hash)).await?;
        uow.complete().await?;

        log::info!("사용자 등록: {} (ID: {:?})", user.email, user.id);
        Ok(ApiResult::created(UserResponse::from(user)))
    }

    /// 설정된 관리자 계정이 없으면 생성합니다. 이미 있으면 그대로 둡니다.
    pub async fn ensure_seed_account(&self, seed: &SeedConfig) -> AppResult<()> {
        let result = self.register(&seed.email, &seed.password).await?;

        match result.kind() {
            None => log::info!("✅ 관리자 계정 생성: {}", seed.email),
            Some(FaultKind::Conflict) => log::info!("관리자 계정이 이미 존재합니다: {}", seed.email),
            Some(_) => log::warn!("관리자 계정 생성 실패: {:?}", result.error()),
        }

        Ok(())
    }
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flatten()
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

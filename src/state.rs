//! 애플리케이션 공유 상태
//!
//! 시작 시점에 설정과 DB 풀로 한 번 만들어지고, 워커마다 복제되어
//! `web::Data`로 핸들러와 미들웨어에 주입됩니다. 요청 처리 중에는 읽기 전용입니다.

use actix_web::web;

use crate::config::{AppConfig, Environment};
use crate::db::Database;
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::products::ProductService;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub environment: Environment,
    pub db: Database,
    pub products: ProductService,
    pub users: UserService,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: &AppConfig, db: Database) -> Self {
        let tokens = TokenService::new(config.jwt.clone());
        let hasher = PasswordHasher::new(config.password.bcrypt_cost);

        Self {
            environment: config.environment,
            products: ProductService::new(db.clone()),
            users: UserService::new(db.clone(), hasher, tokens.clone()),
            tokens,
            db,
        }
    }

    /// 핸들러/미들웨어가 추출할 수 있도록 각 컴포넌트를 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.db.clone()))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.tokens.clone()));
    }
}

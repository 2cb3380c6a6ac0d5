//! # 상품 관리 서비스
//!
//! 상품 CRUD와 목록 조회를 담당합니다. 요청마다 새
//! [`UnitOfWork`]를 열고, 쓰기 연산은 성공했을 때만 커밋합니다.
//!
//! ## 결과 매핑
//!
//! | 연산 | 성공 | 실패 |
//! |------|------|------|
//! | `get_by_id` | 200 | 404 없음 |
//! | `get_all` / `search_by_name` | 200 목록 | - |
//! | `get_by_price_range` | 200 목록 | 400 잘못된 범위 |
//! | `create` | 201 | 400 검증 실패 |
//! | `update` | 200 | 400 ID 불일치/검증 실패, 404 없음, 409 버전 충돌 |
//! | `delete` | 204 | 404 없음 |

use actix_web::http::StatusCode;

use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::dto::ProductRequest;
use crate::domain::entities::Product;
use crate::domain::envelope::{ApiResult, ApiResultList};
use crate::repositories::{ProductRepository, Repository, UnitOfWork};

const ID_MISMATCH_MESSAGE: &str = "El ID de la ruta no coincide con el ID del producto";
const VERSION_CONFLICT_MESSAGE: &str =
    "El producto fue modificado por otro usuario. Recargue los datos e intente de nuevo";

fn not_found_message(id: i64) -> String {
    format!("No se encontró el producto con ID: {}", id)
}

#[derive(Clone)]
pub struct ProductService {
    db: Database,
}

impl ProductService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ApiResult<Product>> {
        let mut uow = UnitOfWork::begin(&self.db).await?;

        match uow.products().get_by_id(id).await? {
            Some(product) => Ok(ApiResult::success(product)),
            None => {
                log::debug!("상품 없음: id={}", id);
                Ok(ApiResult::not_found(not_found_message(id)))
            }
        }
    }

    pub async fn get_all(&self) -> AppResult<ApiResultList<Product>> {
        let mut uow = UnitOfWork::begin(&self.db).await?;
        let products = uow.products().get_all().await?;

        log::debug!("상품 목록 조회: {}건", products.len());
        Ok(ApiResultList::from_all(products))
    }

    /// 이름에 `name`이 포함된 상품 (대소문자 구분). 이름이 없거나 비어 있으면 전체 목록입니다.
    pub async fn search_by_name(&self, name: Option<&str>) -> AppResult<ApiResultList<Product>> {
        let mut uow = UnitOfWork::begin(&self.db).await?;

        let products = match name.filter(|n| !n.is_empty()) {
            Some(name) => uow.products().find_by_name(name).await?,
            None => uow.products().get_all().await?,
        };

        Ok(ApiResultList::from_all(products))
    }

    pub async fn get_by_price_range(&self, min: f64, max: f64) -> AppResult<ApiResultList<Product>> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
            return Ok(ApiResultList::validation(
                "Los precios del rango deben ser números no negativos",
            ));
        }
        if min > max {
            return Ok(ApiResultList::validation(
                "El precio mínimo no puede ser mayor al precio máximo",
            ));
        }

        let mut uow = UnitOfWork::begin(&self.db).await?;
        let products = uow.products().find_by_price_range(min, max).await?;

        Ok(ApiResultList::from_all(products))
    }

    pub async fn create(&self, request: ProductRequest) -> AppResult<ApiResult<Product>> {
        let messages = request.validation_messages();
        if !messages.is_empty() {
            log::warn!("상품 생성 검증 실패: {:?}", messages);
            return Ok(ApiResult::validation(messages.join("; ")));
        }

        let mut uow = UnitOfWork::begin_write(&self.db).await?;
        let product = uow.products().add(request.into_product()).await?;
        uow.complete().await?;

        log::info!("상품 생성: id={:?}, nombre={}", product.id, product.name);
        Ok(ApiResult::created(product))
    }

    /// 경로의 `id`와 요청 본문의 `productoId`가 다르면 저장소에 접근하지 않고 거절합니다.
    ///
    /// 요청에 `version`이 있으면 그 버전을, 없으면 방금 읽은 버전을 저장 조건으로 씁니다.
    /// 조건에 맞는 행이 없으면 409입니다.
    pub async fn update(&self, id: i64, request: ProductRequest) -> AppResult<ApiResult<Product>> {
        if request.product_id != Some(id) {
            log::warn!(
                "상품 수정 ID 불일치: path={}, body={:?}",
                id,
                request.product_id
            );
            return Ok(ApiResult::validation(ID_MISMATCH_MESSAGE));
        }

        let messages = request.validation_messages();
        if !messages.is_empty() {
            log::warn!("상품 수정 검증 실패: {:?}", messages);
            return Ok(ApiResult::validation(messages.join("; ")));
        }

        let mut uow = UnitOfWork::begin_write(&self.db).await?;
        let Some(mut product) = uow.products().get_by_id(id).await? else {
            return Ok(ApiResult::not_found(not_found_message(id)));
        };
        let stored_version = product.version;

        request.apply_to(&mut product);
        if let Some(version) = request.version {
            product.version = version;
        }

        if !uow.products().update(&mut product).await? {
            log::warn!(
                "상품 수정 버전 충돌: id={}, 요청={:?}, 저장={}",
                id,
                request.version,
                stored_version
            );
            return Ok(ApiResult::conflict(VERSION_CONFLICT_MESSAGE));
        }
        uow.complete().await?;

        log::info!("상품 수정: id={}, version={}", id, product.version);
        Ok(ApiResult::success(product))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ApiResult<()>> {
        let mut uow = UnitOfWork::begin_write(&self.db).await?;

        let Some(product) = uow.products().get_by_id(id).await? else {
            return Ok(ApiResult::not_found(not_found_message(id)));
        };
        if !uow.products().delete(&product).await? {
            return Ok(ApiResult::not_found(not_found_message(id)));
        }
        uow.complete().await?;

        log::info!("상품 삭제: id={}", id);
        Ok(ApiResult::success_with_status((), StatusCode::NO_CONTENT))
    }
}

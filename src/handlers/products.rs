//! # Product HTTP Handlers
//!
//! 상품 리소스의 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 | 인증 |
//! |--------|------|------|------|------|
//! | `GET` | `/api/producto` | 200 `{data, totalRecords}` | 500 | - |
//! | `GET` | `/api/producto/search?nombre=` | 200 목록 | - | - |
//! | `GET` | `/api/producto/pricerange?minPrice=&maxPrice=` | 200 목록 | 400 | - |
//! | `GET` | `/api/producto/{id}` | 200 상품 | 404 | - |
//! | `POST` | `/api/producto` | 201 상품 + `Location` | 400 | Bearer |
//! | `PUT` | `/api/producto/{id}` | 200 상품 | 400 / 404 / 409 | Bearer |
//! | `DELETE` | `/api/producto/{id}` | 204 | 404 | Bearer |
//!
//! `search`와 `pricerange`는 `{id}`보다 먼저 등록되어야 합니다.

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::{NameSearchQuery, PriceRangeQuery, ProductRequest};
use crate::domain::models::AuthenticatedUser;
use crate::handlers::IntoHttpResponse;
use crate::services::products::ProductService;

#[get("")]
pub async fn get_all_products(
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let result = service.get_all().await?;
    Ok(result.into_http_response())
}

#[get("/search")]
pub async fn search_products(
    service: web::Data<ProductService>,
    query: web::Query<NameSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let result = service.search_by_name(query.nombre.as_deref()).await?;
    Ok(result.into_http_response())
}

#[get("/pricerange")]
pub async fn get_products_by_price_range(
    service: web::Data<ProductService>,
    query: web::Query<PriceRangeQuery>,
) -> Result<HttpResponse, AppError> {
    let result = service
        .get_by_price_range(query.min_price, query.max_price)
        .await?;
    Ok(result.into_http_response())
}

#[get("/{id}")]
pub async fn get_product(
    service: web::Data<ProductService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let result = service.get_by_id(id.into_inner()).await?;
    Ok(result.into_http_response())
}

/// 상품 생성. 성공 시 `Location: /api/producto/{id}` 헤더를 붙입니다.
#[post("")]
pub async fn create_product(
    service: web::Data<ProductService>,
    user: AuthenticatedUser,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!("상품 생성 요청 - 사용자 ID: {}", user.user_id);

    let result = service.create(payload.into_inner()).await?;

    match result.into_parts() {
        Ok((product, status)) => {
            let mut response = HttpResponse::build(status);
            if let Some(id) = product.id {
                response.insert_header((header::LOCATION, format!("/api/producto/{}", id)));
            }
            Ok(response.json(product))
        }
        Err(details) => Ok(details.to_response()),
    }
}

#[put("/{id}")]
pub async fn update_product(
    service: web::Data<ProductService>,
    user: AuthenticatedUser,
    id: web::Path<i64>,
    payload: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    log::debug!("상품 수정 요청 - 사용자 ID: {}", user.user_id);

    let result = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(result.into_http_response())
}

#[delete("/{id}")]
pub async fn delete_product(
    service: web::Data<ProductService>,
    user: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    log::debug!("상품 삭제 요청 - 사용자 ID: {}", user.user_id);

    let result = service.delete(id.into_inner()).await?;
    Ok(result.into_http_response())
}

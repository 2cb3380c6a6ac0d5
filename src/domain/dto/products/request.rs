//! 상품 요청 DTO
//!
//! 생성/수정 요청 본문과 목록 조회용 쿼리 파라미터를 정의합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 | 메시지 |
//! |------|------|--------|
//! | `nombre` | 공백 제외 1자 이상 | `El nombre del producto es requerido` |
//! | `precio` | 0보다 큼 | `El precio del producto debe ser mayor a 0` |
//! | `cantidad` | 0 이상 (생략 시 0) | `La cantidad del producto no puede ser negativa` |
//!
//! 검증은 [`ProductService`](crate::services::products::ProductService)가
//! 저장소에 접근하기 전에 수행하며, 실패는 400 엔벨로프로 반환됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Product;

/// 검증 실패 메시지를 정렬할 때 사용하는 규칙 코드 순서
const RULE_ORDER: [&str; 3] = ["nombre_requerido", "precio_invalido", "cantidad_negativa"];

/// 상품 생성/수정 요청
///
/// ```json
/// { "productoId": 3, "nombre": "Widget", "precio": 9.99, "cantidad": 5, "version": 1 }
/// ```
///
/// `productoId`는 수정 요청에서 경로의 ID와 일치해야 하며, `version`은
/// 클라이언트가 마지막으로 읽은 버전입니다(생략 시 버전 검사는 저장 시점에만 수행).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(rename = "productoId", default)]
    pub product_id: Option<i64>,

    #[serde(rename = "nombre", default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(rename = "precio", default)]
    #[validate(range(
        exclusive_min = 0.0,
        code = "precio_invalido",
        message = "El precio del producto debe ser mayor a 0"
    ))]
    pub price: f64,

    #[serde(rename = "cantidad", default)]
    #[validate(range(
        min = 0,
        code = "cantidad_negativa",
        message = "La cantidad del producto no puede ser negativa"
    ))]
    pub quantity: i64,

    #[serde(default)]
    pub version: Option<i64>,
}

impl ProductRequest {
    /// 검증 실패 메시지를 필드 순서(이름, 가격, 수량)대로 반환합니다.
    /// 유효한 요청이면 빈 목록입니다.
    pub fn validation_messages(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let mut failures: Vec<&ValidationError> =
            errors.field_errors().into_values().flatten().collect();
        failures.sort_by_key(|e| {
            RULE_ORDER
                .iter()
                .position(|code| *code == e.code)
                .unwrap_or(RULE_ORDER.len())
        });

        failures
            .into_iter()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => e.code.to_string(),
            })
            .collect()
    }

    /// 저장 전 엔티티로 변환합니다. 식별자와 버전은 저장소가 부여합니다.
    pub fn into_product(self) -> Product {
        Product::new(self.name, self.price, self.quantity)
    }

    /// 수정 가능한 필드(이름, 가격, 수량)를 기존 엔티티에 덮어씁니다.
    pub fn apply_to(&self, product: &mut Product) {
        product.name = self.name.clone();
        product.price = self.price;
        product.quantity = self.quantity;
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("nombre_requerido")
            .with_message("El nombre del producto es requerido".into()));
    }
    Ok(())
}

/// `GET /api/producto/search?nombre=` 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct NameSearchQuery {
    pub nombre: Option<String>,
}

/// `GET /api/producto/pricerange?minPrice=&maxPrice=` 쿼리
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PriceRangeQuery {
    #[serde(rename = "minPrice")]
    pub min_price: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
}

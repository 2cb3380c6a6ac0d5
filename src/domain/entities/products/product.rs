//! Product Entity Implementation
//!
//! 상품 엔티티의 핵심 구현체입니다.
//! JSON 필드 이름은 프론트엔드 모델(`productoId`, `nombre`, `precio`, `cantidad`)을,
//! 컬럼 이름은 `productos` 테이블 스키마를 따릅니다.

use serde::{Deserialize, Serialize};

use super::super::{Entity, SqliteQuery};

/// 상품 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// 저장소가 부여하는 식별자 (저장 전에는 None)
    #[serde(rename = "productoId")]
    #[sqlx(rename = "producto_id")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    #[sqlx(rename = "precio")]
    pub price: f64,
    #[serde(rename = "cantidad")]
    #[sqlx(rename = "cantidad")]
    pub quantity: i64,
    /// 낙관적 동시성 제어용 버전 (저장 시 1부터 시작, 수정마다 1 증가)
    pub version: i64,
}

impl Product {
    /// 저장 전 상품 생성
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            quantity,
            version: 1,
        }
    }
}

impl Entity for Product {
    const TABLE: &'static str = "productos";
    const ID_COLUMN: &'static str = "producto_id";
    const COLUMNS: &'static [&'static str] = &["nombre", "precio", "cantidad"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn assign_version(&mut self, version: i64) {
        self.version = version;
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.price)
            .bind(self.quantity)
    }
}

//! # 상품 리포지토리
//!
//! 제네릭 CRUD에 상품 전용 조회(이름 부분 검색, 가격 범위)를 더한 확장 trait입니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::Product;
use crate::repositories::repository::{Repository, SqlRepository};

#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// 이름에 `name`이 포함된 상품 (대소문자 구분)
    ///
    /// SQLite의 `LIKE`는 ASCII 대소문자를 구분하지 않으므로 `instr`을 사용합니다.
    async fn find_by_name(&mut self, name: &str) -> AppResult<Vec<Product>>;

    /// `min <= precio <= max`인 상품 (양 끝 포함)
    async fn find_by_price_range(&mut self, min: f64, max: f64) -> AppResult<Vec<Product>>;
}

#[async_trait]
impl<'c> ProductRepository for SqlRepository<'c, Product> {
    async fn find_by_name(&mut self, name: &str) -> AppResult<Vec<Product>> {
        let sql = format!(
            "{} WHERE instr(nombre, ?) > 0 ORDER BY producto_id",
            Self::select_clause()
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .fetch_all(self.connection())
            .await?;

        Ok(products)
    }

    async fn find_by_price_range(&mut self, min: f64, max: f64) -> AppResult<Vec<Product>> {
        let sql = format!(
            "{} WHERE precio >= ? AND precio <= ? ORDER BY producto_id",
            Self::select_clause()
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(min)
            .bind(max)
            .fetch_all(self.connection())
            .await?;

        Ok(products)
    }
}

//! 상품 엔티티 모듈

pub mod product;

pub use product::Product;

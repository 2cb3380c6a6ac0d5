pub mod request;

pub use request::{NameSearchQuery, PriceRangeQuery, ProductRequest};

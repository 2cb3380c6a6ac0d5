pub mod claims;

pub use claims::{IssuedToken, TokenClaims};

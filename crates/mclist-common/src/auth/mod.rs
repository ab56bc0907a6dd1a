//! Authentication utilities

mod jwt;

pub use jwt::{Claims, IssuedTokens, TokenService, TokenType};

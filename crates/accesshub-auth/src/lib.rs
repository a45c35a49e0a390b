//! # accesshub-auth
//!
//! Authentication and authorization primitives for AccessHub: Argon2id
//! password hashing and policy, JWT token issuance/verification, and the
//! role-module access evaluator.

pub mod access;
pub mod jwt;
pub mod password;

pub use access::{AccessDecision, AccessEvaluator, DenyReason};
pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::{PasswordHasher, PasswordValidator};

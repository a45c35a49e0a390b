//! HTTP request handlers, grouped by domain.

pub mod health;
pub mod role;
pub mod user;

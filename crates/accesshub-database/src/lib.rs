//! # accesshub-database
//!
//! Persistence layer for AccessHub. Defines the [`store::RoleStore`] and
//! [`store::UserStore`] traits that the rest of the application programs
//! against, plus two implementations: PostgreSQL repositories (sqlx) and
//! in-memory stores for tests and ephemeral development deployments.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{RoleStore, UserStore};

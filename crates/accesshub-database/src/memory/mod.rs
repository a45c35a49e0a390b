//! In-memory store implementations.
//!
//! Back the same [`crate::store`] traits as the PostgreSQL repositories,
//! with all records held in process memory behind an `RwLock`. Used by the
//! test suite and by the `database.provider = "memory"` development mode;
//! nothing survives a restart.

pub mod role;
pub mod user;

pub use role::MemoryRoleStore;
pub use user::MemoryUserStore;

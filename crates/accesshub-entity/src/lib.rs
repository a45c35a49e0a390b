//! # accesshub-entity
//!
//! Domain entity models for AccessHub: roles, users, and the shared
//! record status enum used for soft deletion.

pub mod role;
pub mod status;
pub mod user;

pub use role::Role;
pub use status::RecordStatus;
pub use user::User;

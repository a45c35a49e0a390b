//! # accesshub-service
//!
//! Business logic services for AccessHub. Services orchestrate the store
//! traits, the credential hasher, and the token encoder; they never touch
//! the transport layer or a connection pool directly.

pub mod context;
pub mod role;
pub mod user;

pub use context::RequestContext;
pub use role::RoleService;
pub use user::UserService;

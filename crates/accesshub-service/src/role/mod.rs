//! Role lifecycle operations.

pub mod service;

pub use service::RoleService;

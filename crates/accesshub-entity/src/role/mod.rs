//! Role domain entities.

pub mod model;

pub use model::{NewRole, Role, RoleChanges};

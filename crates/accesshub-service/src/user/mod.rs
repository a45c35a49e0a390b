//! User lifecycle operations.

pub mod bulk;
pub mod service;

pub use bulk::{BulkUpdateReport, InvalidFieldEntry, UserFieldUpdate};
pub use service::{LoginOutcome, RegisterUser, UserService, UserWithRole};

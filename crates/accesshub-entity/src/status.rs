//! Record lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a stored record.
///
/// Deletion is always a status flip, never physical removal. Modeled as an
/// enum rather than a boolean so future states (e.g. `Suspended`) only touch
/// this type, not every query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "record_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// The record is live and visible in listings.
    Active,
    /// The record has been soft-deleted. Excluded from listings but still
    /// addressable by id.
    Deleted,
}

impl RecordStatus {
    /// Check if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = accesshub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deleted" => Ok(Self::Deleted),
            _ => Err(accesshub_core::AppError::validation(format!(
                "Invalid record status: '{s}'. Expected one of: active, deleted"
            ))),
        }
    }
}

//! Bulk user updates.
//!
//! Two shapes: `update_many` applies one name change to a set of ids
//! all-or-nothing, while `update_multiple` takes per-user field maps and
//! partitions the batch into applied and rejected entries.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use accesshub_core::error::AppError;
use accesshub_core::result::AppResult;
use accesshub_entity::user::User;

use super::UserService;

/// Fields accepted by [`UserService::update_multiple`]. Anything else is
/// reported back as an invalid key.
const UPDATABLE_FIELDS: [&str; 4] = ["firstName", "lastName", "email", "isActive"];

/// One entry in an [`UserService::update_multiple`] batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFieldUpdate {
    /// Target user id, as supplied by the caller. Kept as a string so a
    /// malformed id can be echoed back instead of failing the whole batch.
    pub id: Option<String>,
    /// Field name to new value.
    #[serde(default)]
    pub update_data: serde_json::Map<String, Value>,
}

/// Per-entry rejection: the id and which of its keys were refused.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidFieldEntry {
    /// The id the entry targeted, or `"missing"`.
    pub id: String,
    /// Keys that are not updatable or carried a wrongly-typed value.
    pub invalid_keys: Vec<String>,
}

/// Outcome of an [`UserService::update_multiple`] batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateReport {
    /// How many users were changed.
    pub modified_count: usize,
    /// Ids that were missing, malformed, or matched no user.
    pub invalid_ids: Vec<String>,
    /// Entries rejected for their field content.
    pub invalid_fields: Vec<InvalidFieldEntry>,
}

impl UserService {
    /// Applies the same name change to every listed user.
    ///
    /// All-or-nothing: if any id does not resolve to a user, nothing is
    /// written and the unknown ids are listed in the error.
    pub async fn update_many(
        &self,
        ids: Vec<Uuid>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> AppResult<usize> {
        if ids.is_empty() {
            return Err(AppError::validation("User id list is required"));
        }
        if first_name.is_none() && last_name.is_none() {
            return Err(AppError::validation(
                "Either first name or last name is required",
            ));
        }
        if first_name.is_some() && last_name.is_some() {
            return Err(AppError::validation(
                "Only one of first name or last name may be updated at a time",
            ));
        }

        // The store returns one row per distinct id, so fold duplicates in
        // the request before the all-or-nothing comparison.
        let mut ids = ids;
        ids.sort_unstable();
        ids.dedup();

        let users = self.user_store().find_by_ids(&ids).await?;
        if users.len() != ids.len() {
            let found: Vec<Uuid> = users.iter().map(|u| u.id).collect();
            let missing: Vec<String> = ids
                .iter()
                .filter(|id| !found.contains(id))
                .map(Uuid::to_string)
                .collect();
            return Err(AppError::not_found(format!(
                "Users not found: {}",
                missing.join(", ")
            )));
        }

        let count = users.len();
        for mut user in users {
            if let Some(first_name) = &first_name {
                user.first_name = first_name.clone();
            }
            if let Some(last_name) = &last_name {
                user.last_name = last_name.clone();
            }
            user.updated_at = Utc::now();
            self.user_store().update(&user).await?;
        }

        info!(count, "Bulk name update applied");
        Ok(count)
    }

    /// Applies per-user field maps, partitioning the batch.
    ///
    /// Valid entries are applied; entries with a missing, malformed, or
    /// unknown id land in `invalid_ids`, and entries carrying unknown keys
    /// or wrongly-typed values land in `invalid_fields`. Only when no entry
    /// is applicable does the call fail outright.
    pub async fn update_multiple(
        &self,
        updates: Vec<UserFieldUpdate>,
    ) -> AppResult<BulkUpdateReport> {
        if updates.is_empty() {
            return Err(AppError::validation("Update list is required"));
        }

        let mut invalid_ids = Vec::new();
        let mut invalid_fields = Vec::new();
        let mut applicable = Vec::new();

        for update in updates {
            let raw_id = match &update.id {
                Some(id) => id.clone(),
                None => {
                    invalid_ids.push("missing".to_string());
                    continue;
                }
            };
            let Ok(id) = Uuid::parse_str(&raw_id) else {
                invalid_ids.push(raw_id);
                continue;
            };

            // An entry with nothing to apply is grouped with the bad ids,
            // not the bad fields.
            if update.update_data.is_empty() {
                invalid_ids.push(raw_id);
                continue;
            }

            let invalid_keys = invalid_keys_of(&update.update_data);
            if !invalid_keys.is_empty() {
                invalid_fields.push(InvalidFieldEntry {
                    id: raw_id,
                    invalid_keys,
                });
                continue;
            }

            applicable.push((id, raw_id, update.update_data));
        }

        let mut modified_count = 0;
        for (id, raw_id, fields) in applicable {
            let Some(mut user) = self.user_store().find_by_id(id).await? else {
                invalid_ids.push(raw_id);
                continue;
            };
            apply_fields(&mut user, &fields);
            user.updated_at = Utc::now();
            self.user_store().update(&user).await?;
            modified_count += 1;
        }

        if modified_count == 0 {
            let rejected_fields: Vec<String> =
                invalid_fields.iter().map(|e| e.id.clone()).collect();
            return Err(AppError::validation(format!(
                "No valid updates in batch (invalid ids: [{}]; invalid fields: [{}])",
                invalid_ids.join(", "),
                rejected_fields.join(", ")
            )));
        }

        info!(modified_count, "Bulk field update applied");
        Ok(BulkUpdateReport {
            modified_count,
            invalid_ids,
            invalid_fields,
        })
    }
}

/// Returns the keys of `fields` that are not updatable or whose value has
/// the wrong type.
fn invalid_keys_of(fields: &serde_json::Map<String, Value>) -> Vec<String> {
    fields
        .iter()
        .filter(|(key, value)| !is_valid_field(key, value))
        .map(|(key, _)| key.clone())
        .collect()
}

fn is_valid_field(key: &str, value: &Value) -> bool {
    if !UPDATABLE_FIELDS.contains(&key) {
        return false;
    }
    match key {
        "isActive" => value.is_boolean(),
        _ => value.is_string(),
    }
}

/// Copies validated fields onto the user. Callers have already filtered
/// the map through [`invalid_keys_of`].
fn apply_fields(user: &mut User, fields: &serde_json::Map<String, Value>) {
    for (key, value) in fields {
        match (key.as_str(), value) {
            ("firstName", Value::String(v)) => user.first_name = v.clone(),
            ("lastName", Value::String(v)) => user.last_name = v.clone(),
            ("email", Value::String(v)) => user.email = v.clone(),
            ("isActive", Value::Bool(v)) => user.is_active = *v,
            _ => {}
        }
    }
}

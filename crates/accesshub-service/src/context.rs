//! Per-request caller context.

use uuid::Uuid;

/// Identity recovered from a verified bearer token, carried through the
/// request. Holds only claims data; entity state is re-read per operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: Uuid,
    /// The email asserted at token issuance.
    pub email: String,
    /// The role asserted at token issuance.
    pub role_id: Uuid,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, role_id: Uuid) -> Self {
        Self {
            user_id,
            email,
            role_id,
        }
    }
}

use serde::{Deserialize, Serialize};

use fleetcare_core::UserId;

use crate::Role;

/// A resolved acting identity.
///
/// Construction is intentionally decoupled from storage and transport:
/// the authentication collaborator derives this from a credential, and the
/// use-case layer only ever sees the resolved pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

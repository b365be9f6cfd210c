//! Static credential authenticator for tests and local development.

use std::collections::HashMap;

use fleetcare_auth::{AuthError, Authenticator, Principal};

/// Maps fixed bearer credentials to principals.
#[derive(Debug, Default)]
pub struct StaticAuthenticator {
    principals: HashMap<String, Principal>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(mut self, credential: impl Into<String>, principal: Principal) -> Self {
        self.principals.insert(credential.into(), principal);
        self
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credential: &str) -> Result<Principal, AuthError> {
        self.principals
            .get(credential)
            .copied()
            .ok_or(AuthError::InvalidCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetcare_auth::Role;
    use fleetcare_core::UserId;

    #[test]
    fn resolves_known_credentials_and_rejects_unknown() {
        let alice = Principal::new(UserId::new(), Role::VehicleOwner);
        let auth = StaticAuthenticator::new().with_credential("token-alice", alice);

        assert_eq!(auth.authenticate("token-alice"), Ok(alice));
        assert_eq!(
            auth.authenticate("token-mallory"),
            Err(AuthError::InvalidCredential)
        );
    }
}

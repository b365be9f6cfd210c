use thiserror::Error;

use crate::Principal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credential")]
    InvalidCredential,
}

/// Authentication collaborator: resolves a bearer credential to a
/// [`Principal`].
///
/// The domain never parses tokens; implementations (JWT verification, static
/// test fixtures) live in the infrastructure layer.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credential: &str) -> Result<Principal, AuthError>;
}

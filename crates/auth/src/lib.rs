//! Authentication/authorization primitives.
//!
//! Token formats and transport live outside this workspace; the application
//! layer only ever sees a resolved [`Principal`].

pub mod authenticate;
pub mod principal;
pub mod roles;

pub use authenticate::{AuthError, Authenticator};
pub use principal::Principal;
pub use roles::Role;

//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the session behind a JWT Bearer token.
//! - [`rbac::RequireReviewer`] -- Requires the `sv` or `admin` role.

pub mod auth;
pub mod rbac;

//! Well-known role names and the [`Role`] enum.
//!
//! The string forms match the role values carried in access-token claims.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_OPERATOR: &str = "operator";
pub const ROLE_SUPERVISOR: &str = "sv";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_OPERATOR, ROLE_SUPERVISOR, ROLE_ADMIN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "operator")]
    Operator,
    #[serde(rename = "sv")]
    Supervisor,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Operator => ROLE_OPERATOR,
            Role::Supervisor => ROLE_SUPERVISOR,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Supervisors and admins review pending submissions.
    pub fn is_reviewer(self) -> bool {
        matches!(self, Role::Supervisor | Role::Admin)
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_OPERATOR => Ok(Role::Operator),
            ROLE_SUPERVISOR => Ok(Role::Supervisor),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(format!(
                "Invalid role '{other}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            )),
        }
    }
}

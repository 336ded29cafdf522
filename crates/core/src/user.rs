use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::DbId;

/// A signed-in user. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub group: String,
}

impl User {
    pub fn is_reviewer(&self) -> bool {
        self.role.is_reviewer()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

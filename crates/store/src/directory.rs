//! User directory and reference-data lookups.
//!
//! The HTTP layer only talks to [`Directory`]; [`FixtureDirectory`] backs
//! it with the static seed data and a plain credential comparison.

use faq_core::error::CoreError;
use faq_core::reference::{ApprovalGroup, Category};
use faq_core::user::User;

use crate::fixtures;

/// Message returned for every failed login. Unknown users and wrong
/// passwords are indistinguishable.
pub const LOGIN_FAILED_MESSAGE: &str =
    "ログインに失敗しました。ユーザー名またはパスワードが正しくありません。";

pub trait Directory: Send + Sync {
    /// Resolve credentials to a user.
    fn lookup_user(&self, email: &str, password: &str) -> Result<User, CoreError>;

    fn list_categories(&self) -> &[Category];

    fn list_approval_groups(&self) -> &[ApprovalGroup];
}

struct Account {
    user: User,
    password: String,
}

pub struct FixtureDirectory {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    approval_groups: Vec<ApprovalGroup>,
}

impl FixtureDirectory {
    pub fn new(
        accounts: Vec<(User, String)>,
        categories: Vec<Category>,
        approval_groups: Vec<ApprovalGroup>,
    ) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|(user, password)| Account { user, password })
                .collect(),
            categories,
            approval_groups,
        }
    }

    /// Directory built from [`fixtures`].
    pub fn seeded() -> Self {
        Self::new(
            fixtures::accounts(),
            fixtures::categories(),
            fixtures::approval_groups(),
        )
    }
}

impl Directory for FixtureDirectory {
    fn lookup_user(&self, email: &str, password: &str) -> Result<User, CoreError> {
        let email = email.trim();
        self.accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email) && a.password == password)
            .map(|a| a.user.clone())
            .ok_or_else(|| CoreError::Unauthorized(LOGIN_FAILED_MESSAGE.into()))
    }

    fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    fn list_approval_groups(&self) -> &[ApprovalGroup] {
        &self.approval_groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use faq_core::roles::Role;

    #[test]
    fn known_credentials_resolve() {
        let directory = FixtureDirectory::seeded();
        let user = directory
            .lookup_user("SATO@example.com", fixtures::FIXTURE_PASSWORD)
            .unwrap();
        assert_eq!(user.role, Role::Supervisor);
    }

    #[test]
    fn failures_share_one_message() {
        let directory = FixtureDirectory::seeded();
        let wrong_password = directory
            .lookup_user("sato@example.com", "nope")
            .unwrap_err();
        let unknown_user = directory
            .lookup_user("ghost@example.com", fixtures::FIXTURE_PASSWORD)
            .unwrap_err();

        assert_matches!(&wrong_password, CoreError::Unauthorized(m) if m == LOGIN_FAILED_MESSAGE);
        assert_matches!(&unknown_user, CoreError::Unauthorized(m) if m == LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn reference_lists_are_exposed() {
        let directory = FixtureDirectory::seeded();
        assert!(!directory.list_categories().is_empty());
        assert_eq!(directory.list_approval_groups().len(), 3);
    }
}

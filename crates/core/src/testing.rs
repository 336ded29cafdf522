//! Builders shared by unit tests in this crate.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::article::{ApprovalStamp, Article, ArticleKind, ArticleStatus};
use crate::roles::Role;
use crate::types::Timestamp;
use crate::user::User;

/// `2024-04-01T09:00:00Z` plus `minutes`.
pub fn ts(minutes: i64) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes)
}

pub fn user(id: i64, role: Role) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role,
        group: "サポート1課".into(),
    }
}

pub fn operator() -> User {
    user(1, Role::Operator)
}

pub fn supervisor() -> User {
    user(2, Role::Supervisor)
}

pub fn admin() -> User {
    user(3, Role::Admin)
}

/// A pending standard article authored by [`operator`], created at
/// `ts(created)`.
pub fn article(number: &str, created: i64) -> Article {
    let author = operator();
    Article {
        id: Uuid::new_v4(),
        article_number: number.to_string(),
        kind: ArticleKind::Standard,
        title: format!("Title {number}"),
        category: "システム".into(),
        approval_group: String::new(),
        keywords: Vec::new(),
        is_important: false,
        public_start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        public_end_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        question: "Question".into(),
        answer: "Answer".into(),
        additional_comment: None,
        notes: None,
        status: ArticleStatus::Pending,
        author_id: author.id,
        author_name: author.name,
        created_at: ts(created),
        approval: None,
        rejection: None,
    }
}

/// An approved article created at `ts(created)` and approved at
/// `ts(approved)` by [`supervisor`].
pub fn approved(number: &str, created: i64, approved: i64) -> Article {
    let mut a = article(number, created);
    a.status = ArticleStatus::Approved;
    a.approval = Some(ApprovalStamp {
        approved_by: supervisor().id,
        approved_at: ts(approved),
        comment: String::new(),
    });
    a
}

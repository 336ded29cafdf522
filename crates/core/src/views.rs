//! Read-side projections backing the approval queue and "my posts" lists.

use serde::{Deserialize, Serialize};

use crate::article::{Article, ArticleStatus};
use crate::user::User;

/// Pending articles in collection order.
pub fn pending_queue(articles: &[Article]) -> Vec<&Article> {
    articles
        .iter()
        .filter(|a| a.status == ArticleStatus::Pending)
        .collect()
}

/// Per-status visibility toggles on the "my posts" list. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusToggles {
    pub approved: bool,
    pub pending: bool,
    pub draft: bool,
    pub rejected: bool,
}

impl Default for StatusToggles {
    fn default() -> Self {
        Self {
            approved: true,
            pending: true,
            draft: true,
            rejected: true,
        }
    }
}

impl StatusToggles {
    pub fn shows(&self, status: ArticleStatus) -> bool {
        match status {
            ArticleStatus::Approved => self.approved,
            ArticleStatus::Pending => self.pending,
            ArticleStatus::Draft => self.draft,
            ArticleStatus::Rejected => self.rejected,
        }
    }

    pub fn toggle(&mut self, status: ArticleStatus) {
        let flag = match status {
            ArticleStatus::Approved => &mut self.approved,
            ArticleStatus::Pending => &mut self.pending,
            ArticleStatus::Draft => &mut self.draft,
            ArticleStatus::Rejected => &mut self.rejected,
        };
        *flag = !*flag;
    }
}

/// Number of posts in each status, over all of a user's posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub approved: usize,
    pub pending: usize,
    pub draft: usize,
    pub rejected: usize,
}

/// Articles authored by `user`, restricted to the enabled statuses.
pub fn my_posts<'a>(
    articles: &'a [Article],
    user: &User,
    toggles: &StatusToggles,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| a.author_id == user.id && toggles.shows(a.status))
        .collect()
}

pub fn status_counts(articles: &[Article], user: &User) -> StatusCounts {
    articles
        .iter()
        .filter(|a| a.author_id == user.id)
        .fold(StatusCounts::default(), |mut counts, a| {
            match a.status {
                ArticleStatus::Approved => counts.approved += 1,
                ArticleStatus::Pending => counts.pending += 1,
                ArticleStatus::Draft => counts.draft += 1,
                ArticleStatus::Rejected => counts.rejected += 1,
            }
            counts
        })
}

/// Actions offered on a post in the "my posts" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostAction {
    View,
    Edit,
    Resubmit,
    Delete,
}

pub fn post_actions(status: ArticleStatus) -> &'static [PostAction] {
    match status {
        ArticleStatus::Approved => &[PostAction::View],
        ArticleStatus::Pending | ArticleStatus::Draft => &[PostAction::Edit, PostAction::Delete],
        ArticleStatus::Rejected => &[PostAction::Resubmit, PostAction::Delete],
    }
}

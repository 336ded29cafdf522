//! The canonical in-memory article collection.
//!
//! [`ArticleStore`] owns the collection and applies the pure reducers from
//! [`faq_core::lifecycle`]. A reducer either returns a complete new
//! collection, which replaces the old one, or an error, in which case the
//! store is left exactly as it was.

use std::collections::HashSet;

use faq_core::article::Article;
use faq_core::error::CoreError;
use faq_core::lifecycle::{self, Applied, ApprovalDecision, RejectionDecision, Submission};
use faq_core::search::{self, SearchFilters};
use faq_core::types::{ArticleId, Timestamp};
use faq_core::user::User;
use faq_core::views::{self, StatusCounts, StatusToggles};

use crate::fixtures;

#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Build a store from an initial snapshot.
    ///
    /// Fails when a record violates its status invariants or two records
    /// share an article number.
    pub fn new(snapshot: Vec<Article>) -> Result<Self, CoreError> {
        let mut numbers = HashSet::new();
        for article in &snapshot {
            article.check_invariants()?;
            if !numbers.insert(article.article_number.as_str()) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate article number {} in snapshot",
                    article.article_number
                )));
            }
        }
        Ok(Self { articles: snapshot })
    }

    /// Store built from [`fixtures::articles`].
    pub fn seeded() -> Result<Self, CoreError> {
        Self::new(fixtures::articles())
    }

    // -- reads ---------------------------------------------------------------

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn get(&self, id: ArticleId) -> Result<&Article, CoreError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::article_not_found(id))
    }

    pub fn find_by_number(&self, number: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.article_number == number)
    }

    pub fn search(&self, filters: &SearchFilters) -> Vec<&Article> {
        search::apply_filters(&self.articles, filters)
    }

    pub fn pending_queue(&self) -> Vec<&Article> {
        views::pending_queue(&self.articles)
    }

    pub fn my_posts(&self, user: &User, toggles: &StatusToggles) -> Vec<&Article> {
        views::my_posts(&self.articles, user, toggles)
    }

    pub fn status_counts(&self, user: &User) -> StatusCounts {
        views::status_counts(&self.articles, user)
    }

    // -- writes --------------------------------------------------------------

    /// Apply a create, edit, or deletion-proposal submission.
    pub fn submit(
        &mut self,
        actor: &User,
        submission: Submission,
        now: Timestamp,
    ) -> Result<&Article, CoreError> {
        let applied = lifecycle::save(&self.articles, actor, submission, now)?;
        let id = self.commit(applied);
        let article = self.get(id)?;
        tracing::info!(
            user_id = actor.id,
            article_id = %id,
            article_number = %article.article_number,
            status = %article.status,
            "Article saved"
        );
        Ok(article)
    }

    pub fn approve(
        &mut self,
        actor: &User,
        id: ArticleId,
        decision: &ApprovalDecision,
        now: Timestamp,
    ) -> Result<&Article, CoreError> {
        let applied = lifecycle::approve(&self.articles, actor, id, decision, now)?;
        self.commit(applied);
        tracing::info!(
            user_id = actor.id,
            article_id = %id,
            approval_group = %decision.approval_group,
            "Article approved"
        );
        self.get(id)
    }

    pub fn reject(
        &mut self,
        actor: &User,
        id: ArticleId,
        decision: &RejectionDecision,
        now: Timestamp,
    ) -> Result<&Article, CoreError> {
        let applied = lifecycle::reject(&self.articles, actor, id, decision, now)?;
        self.commit(applied);
        tracing::info!(user_id = actor.id, article_id = %id, "Article rejected");
        self.get(id)
    }

    /// Hard-delete an article, returning the removed record.
    pub fn delete(&mut self, actor: &User, id: ArticleId) -> Result<Article, CoreError> {
        let removed = self.get(id)?.clone();
        let applied = lifecycle::delete(&self.articles, actor, id)?;
        self.commit(applied);
        tracing::info!(
            user_id = actor.id,
            article_id = %id,
            article_number = %removed.article_number,
            "Article deleted"
        );
        Ok(removed)
    }

    fn commit(&mut self, applied: Applied) -> ArticleId {
        self.articles = applied.articles;
        applied.article_id
    }
}

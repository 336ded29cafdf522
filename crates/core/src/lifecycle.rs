//! Lifecycle reducers for FAQ articles.
//!
//! Every reducer borrows the current collection and returns a new one; on
//! error nothing is returned, so a caller holding the canonical collection
//! never observes a half-applied change. The current time is passed in so
//! the same inputs always produce the same record.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::article::{
    generate_article_number, is_standard_article_number, ApprovalStamp, Article, ArticleKind,
    ArticleStatus, RejectionStamp, DELETION_PREFIX, STANDARD_PREFIX,
};
use crate::error::{CoreError, FieldError};
use crate::forms::{self, DeletionProposalForm};
use crate::reference::DELETION_PROPOSAL_CATEGORY;
use crate::types::{ArticleId, Timestamp};
use crate::user::User;

/// Default public period when the submitter leaves the end date blank.
pub const DEFAULT_PUBLIC_PERIOD_DAYS: i64 = 365;

/// Attempts at synthesizing an unused article number before giving up.
const MAX_NUMBER_ATTEMPTS: usize = 32;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Fields supplied by the article form. `None` means "not supplied": on
/// create the field takes its default, on edit the stored value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDraft {
    pub article_number: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub approval_group: Option<String>,
    /// A list, or the form's comma-separated text.
    #[serde(deserialize_with = "keywords_input")]
    pub keywords: Option<Vec<String>>,
    pub is_important: Option<bool>,
    pub public_start_date: Option<NaiveDate>,
    pub public_end_date: Option<NaiveDate>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub additional_comment: Option<String>,
    pub notes: Option<String>,
    /// Only `draft` and `pending` may be requested.
    pub status: Option<ArticleStatus>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeywordsInput {
    List(Vec<String>),
    Text(String),
}

fn keywords_input<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<KeywordsInput>::deserialize(deserializer)?.map(|input| match input {
            KeywordsInput::List(keywords) => keywords,
            KeywordsInput::Text(text) => forms::parse_keywords(&text),
        }),
    )
}

/// A user submission, discriminated by what it does to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ArticleDraft),
    Edit { id: ArticleId, draft: ArticleDraft },
    DeletionProposal { target: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApprovalDecision {
    pub approval_group: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RejectionDecision {
    pub reason: String,
}

/// Result of a successful reducer: the new collection plus the id of the
/// record that was created, changed, or removed.
#[derive(Debug, Clone)]
pub struct Applied {
    pub articles: Vec<Article>,
    pub article_id: ArticleId,
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Whether the detail view offers an edit button: only the author's own
/// articles qualify.
pub fn can_edit(user: &User, article: &Article) -> bool {
    article.author_id == user.id
}

/// Whether [`edit`] accepts a change from `user`. Reviewers may also revise
/// another author's article from the approval screen, and nothing approved
/// may be revised.
pub fn can_revise(user: &User, article: &Article) -> bool {
    article.status != ArticleStatus::Approved && (can_edit(user, article) || user.is_reviewer())
}

/// Only the author may remove an article.
pub fn can_delete(user: &User, article: &Article) -> bool {
    article.author_id == user.id
}

// ---------------------------------------------------------------------------
// Reducers
// ---------------------------------------------------------------------------

/// Apply any [`Submission`].
pub fn save(
    articles: &[Article],
    actor: &User,
    submission: Submission,
    now: Timestamp,
) -> Result<Applied, CoreError> {
    match submission {
        Submission::Create(draft) => create(articles, actor, draft, now),
        Submission::Edit { id, draft } => edit(articles, actor, id, draft),
        Submission::DeletionProposal { target, reason } => {
            propose_deletion(articles, actor, &target, &reason, now)
        }
    }
}

/// Append a new standard article authored by `actor`.
pub fn create(
    articles: &[Article],
    actor: &User,
    draft: ArticleDraft,
    now: Timestamp,
) -> Result<Applied, CoreError> {
    let status = requested_status(draft.status)?.unwrap_or(ArticleStatus::Pending);

    let article_number = match draft.article_number.as_deref().map(str::trim) {
        Some(number) if !number.is_empty() => {
            if !is_standard_article_number(number) {
                return Err(CoreError::InvalidFields(vec![FieldError::new(
                    "article_number",
                    forms::MSG_ARTICLE_NUMBER_FORMAT,
                )]));
            }
            if number_in_use(articles, number) {
                return Err(CoreError::Conflict(format!(
                    "Article number {number} is already in use"
                )));
            }
            number.to_string()
        }
        _ => unused_article_number(articles, STANDARD_PREFIX, now)?,
    };

    let today = now.date_naive();
    let article = Article {
        id: Uuid::new_v4(),
        article_number,
        kind: ArticleKind::Standard,
        title: draft.title.unwrap_or_default(),
        category: draft.category.unwrap_or_default(),
        approval_group: draft.approval_group.unwrap_or_default(),
        keywords: normalize_keywords(draft.keywords.unwrap_or_default()),
        is_important: draft.is_important.unwrap_or(false),
        public_start_date: draft.public_start_date.unwrap_or(today),
        public_end_date: draft
            .public_end_date
            .unwrap_or(today + Duration::days(DEFAULT_PUBLIC_PERIOD_DAYS)),
        question: draft.question.unwrap_or_default(),
        answer: draft.answer.unwrap_or_default(),
        additional_comment: non_blank(draft.additional_comment),
        notes: non_blank(draft.notes),
        status,
        author_id: actor.id,
        author_name: actor.name.clone(),
        created_at: now,
        approval: None,
        rejection: None,
    };
    forms::validate_article(&article)?;

    let article_id = article.id;
    let mut next = articles.to_vec();
    next.push(article);
    Ok(Applied {
        articles: next,
        article_id,
    })
}

/// Merge `draft` into the article identified by `id`.
///
/// Identifier, article number, author and creation time never change.
/// Requesting `draft`/`pending` clears any review stamp, which is how a
/// rejected article is resubmitted.
pub fn edit(
    articles: &[Article],
    actor: &User,
    id: ArticleId,
    draft: ArticleDraft,
) -> Result<Applied, CoreError> {
    let index = position(articles, id)?;
    let existing = &articles[index];

    if existing.status == ArticleStatus::Approved {
        return Err(CoreError::Conflict(format!(
            "Article {} is approved and can no longer be edited",
            existing.article_number
        )));
    }
    if !can_revise(actor, existing) {
        return Err(CoreError::Forbidden(
            "Only the author or a reviewer may edit this article".into(),
        ));
    }
    if let Some(number) = draft.article_number.as_deref().map(str::trim) {
        if !number.is_empty() && number != existing.article_number {
            return Err(CoreError::Validation(format!(
                "Article number {} is immutable",
                existing.article_number
            )));
        }
    }

    let mut updated = existing.clone();
    if let Some(status) = requested_status(draft.status)? {
        existing.status.ensure_transition(status)?;
        updated.status = status;
        updated.approval = None;
        updated.rejection = None;
    }
    if let Some(title) = draft.title {
        updated.title = title;
    }
    if let Some(category) = draft.category {
        updated.category = category;
    }
    if let Some(group) = draft.approval_group {
        updated.approval_group = group;
    }
    if let Some(keywords) = draft.keywords {
        updated.keywords = normalize_keywords(keywords);
    }
    if let Some(important) = draft.is_important {
        updated.is_important = important;
    }
    if let Some(start) = draft.public_start_date {
        updated.public_start_date = start;
    }
    if let Some(end) = draft.public_end_date {
        updated.public_end_date = end;
    }
    if let Some(question) = draft.question {
        updated.question = question;
    }
    if let Some(answer) = draft.answer {
        updated.answer = answer;
    }
    if draft.additional_comment.is_some() {
        updated.additional_comment = non_blank(draft.additional_comment);
    }
    if draft.notes.is_some() {
        updated.notes = non_blank(draft.notes);
    }
    forms::validate_article(&updated)?;

    let mut next = articles.to_vec();
    next[index] = updated;
    Ok(Applied {
        articles: next,
        article_id: id,
    })
}

/// Append a pending deletion proposal for `target`.
///
/// The target must be an article in `articles`. The proposal is an ordinary
/// record that goes through review; nothing about the target changes.
pub fn propose_deletion(
    articles: &[Article],
    actor: &User,
    target: &str,
    reason: &str,
    now: Timestamp,
) -> Result<Applied, CoreError> {
    let form = DeletionProposalForm {
        article_number: target.to_string(),
        reason: reason.to_string(),
    };
    form.validate().map_err(CoreError::InvalidFields)?;
    let target = form.article_number.trim();
    let reason = form.reason.trim();
    if !number_in_use(articles, target) {
        return Err(CoreError::NotFound {
            entity: "Article",
            id: target.to_string(),
        });
    }

    let today = now.date_naive();
    let article = Article {
        id: Uuid::new_v4(),
        article_number: unused_article_number(articles, DELETION_PREFIX, now)?,
        kind: ArticleKind::DeletionProposal {
            target: target.to_string(),
        },
        title: format!("削除提案: {target}"),
        category: DELETION_PROPOSAL_CATEGORY.to_string(),
        approval_group: String::new(),
        keywords: vec![DELETION_PROPOSAL_CATEGORY.to_string()],
        is_important: false,
        public_start_date: today,
        public_end_date: today + Duration::days(DEFAULT_PUBLIC_PERIOD_DAYS),
        question: format!("記事番号 {target} の削除を提案します。"),
        answer: format!("削除理由: {reason}"),
        additional_comment: Some(format!("対象記事: {target}")),
        notes: None,
        status: ArticleStatus::Pending,
        author_id: actor.id,
        author_name: actor.name.clone(),
        created_at: now,
        approval: None,
        rejection: None,
    };

    let article_id = article.id;
    let mut next = articles.to_vec();
    next.push(article);
    Ok(Applied {
        articles: next,
        article_id,
    })
}

/// Approve the article identified by `id`. Re-approving with the same
/// inputs yields the same record.
pub fn approve(
    articles: &[Article],
    actor: &User,
    id: ArticleId,
    decision: &ApprovalDecision,
    now: Timestamp,
) -> Result<Applied, CoreError> {
    ensure_reviewer(actor)?;
    let group = decision.approval_group.trim();
    if group.is_empty() {
        return Err(CoreError::InvalidFields(vec![FieldError::new(
            "approval_group",
            forms::MSG_APPROVAL_GROUP_REQUIRED,
        )]));
    }

    let index = position(articles, id)?;
    articles[index]
        .status
        .ensure_transition(ArticleStatus::Approved)?;

    let mut next = articles.to_vec();
    let article = &mut next[index];
    article.status = ArticleStatus::Approved;
    article.approval_group = group.to_string();
    article.approval = Some(ApprovalStamp {
        approved_by: actor.id,
        approved_at: now,
        comment: decision.comment.clone(),
    });
    article.rejection = None;

    Ok(Applied {
        articles: next,
        article_id: id,
    })
}

/// Reject the article identified by `id` with a non-blank reason.
pub fn reject(
    articles: &[Article],
    actor: &User,
    id: ArticleId,
    decision: &RejectionDecision,
    now: Timestamp,
) -> Result<Applied, CoreError> {
    ensure_reviewer(actor)?;
    let reason = decision.reason.trim();
    if reason.is_empty() {
        return Err(CoreError::InvalidFields(vec![FieldError::new(
            "reason",
            forms::MSG_REJECTION_REASON_REQUIRED,
        )]));
    }

    let index = position(articles, id)?;
    articles[index]
        .status
        .ensure_transition(ArticleStatus::Rejected)?;

    let mut next = articles.to_vec();
    let article = &mut next[index];
    article.status = ArticleStatus::Rejected;
    article.rejection = Some(RejectionStamp {
        reason: reason.to_string(),
        rejected_at: now,
    });
    article.approval = None;

    Ok(Applied {
        articles: next,
        article_id: id,
    })
}

/// Remove the article identified by `id`. No tombstone is kept.
pub fn delete(articles: &[Article], actor: &User, id: ArticleId) -> Result<Applied, CoreError> {
    let index = position(articles, id)?;
    if !can_delete(actor, &articles[index]) {
        return Err(CoreError::Forbidden(
            "Only the author may delete this article".into(),
        ));
    }

    let mut next = articles.to_vec();
    next.remove(index);
    Ok(Applied {
        articles: next,
        article_id: id,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn position(articles: &[Article], id: ArticleId) -> Result<usize, CoreError> {
    articles
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| CoreError::article_not_found(id))
}

fn ensure_reviewer(actor: &User) -> Result<(), CoreError> {
    if actor.is_reviewer() {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Supervisor or Admin role required".into(),
        ))
    }
}

fn requested_status(status: Option<ArticleStatus>) -> Result<Option<ArticleStatus>, CoreError> {
    match status {
        None | Some(ArticleStatus::Draft) | Some(ArticleStatus::Pending) => Ok(status),
        Some(other) => Err(CoreError::Validation(format!(
            "Submissions may only be saved as draft or pending, not {other}"
        ))),
    }
}

fn number_in_use(articles: &[Article], number: &str) -> bool {
    articles.iter().any(|a| a.article_number == number)
}

fn unused_article_number(
    articles: &[Article],
    prefix: &str,
    now: Timestamp,
) -> Result<String, CoreError> {
    (0..MAX_NUMBER_ATTEMPTS)
        .map(|_| generate_article_number(prefix, now))
        .find(|candidate| !number_in_use(articles, candidate))
        .ok_or_else(|| CoreError::Internal(format!("Could not allocate a {prefix} article number")))
}

fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

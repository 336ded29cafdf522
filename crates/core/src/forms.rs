//! Form state and field validation.
//!
//! Field messages are user-facing and use the product's single locale.

use serde::{Deserialize, Serialize};

use crate::article::{is_standard_article_number, Article, ArticleKind, ArticleStatus};
use crate::error::{CoreError, FieldError};
use crate::lifecycle::{ApprovalDecision, RejectionDecision};

// ---------------------------------------------------------------------------
// Messages and limits
// ---------------------------------------------------------------------------

pub const MSG_ARTICLE_NUMBER_REQUIRED: &str = "記事番号を入力してください";
pub const MSG_ARTICLE_NUMBER_FORMAT: &str =
    "記事番号の形式が正しくありません（例: KBA-00001-12345）";
pub const MSG_DELETION_REASON_REQUIRED: &str = "削除理由を入力してください";
pub const MSG_DELETION_REASON_TOO_SHORT: &str = "削除理由は10文字以上で入力してください";
pub const MSG_DELETION_REASON_TOO_LONG: &str = "削除理由は500文字以内で入力してください";
pub const MSG_TITLE_REQUIRED: &str = "タイトルを入力してください";
pub const MSG_CATEGORY_REQUIRED: &str = "カテゴリを選択してください";
pub const MSG_PUBLIC_PERIOD: &str = "公開終了日は公開開始日以降の日付を指定してください";
pub const MSG_APPROVAL_GROUP_REQUIRED: &str = "承認グループを選択してください";
pub const MSG_REJECTION_REASON_REQUIRED: &str = "却下理由を入力してください";

/// Minimum deletion reason length, in characters, after trimming.
pub const DELETION_REASON_MIN_CHARS: usize = 10;

/// Maximum deletion reason length, in characters, after trimming.
pub const DELETION_REASON_MAX_CHARS: usize = 500;

// ---------------------------------------------------------------------------
// Article form
// ---------------------------------------------------------------------------

/// Split the comma-separated keyword field into trimmed, non-empty entries.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a standard article about to be stored.
///
/// Drafts may be incomplete; anything headed for review needs a title and a
/// category. The public period must never end before it starts.
pub fn validate_article(article: &Article) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    if article.status != ArticleStatus::Draft {
        if article.title.trim().is_empty() {
            errors.push(FieldError::new("title", MSG_TITLE_REQUIRED));
        }
        if article.category.trim().is_empty() {
            errors.push(FieldError::new("category", MSG_CATEGORY_REQUIRED));
        }
    }
    if article.public_end_date < article.public_start_date {
        errors.push(FieldError::new("public_end_date", MSG_PUBLIC_PERIOD));
    }
    if article.kind == ArticleKind::Standard && !is_standard_article_number(&article.article_number)
    {
        errors.push(FieldError::new("article_number", MSG_ARTICLE_NUMBER_FORMAT));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(errors))
    }
}

// ---------------------------------------------------------------------------
// Deletion proposal form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionProposalForm {
    pub article_number: String,
    pub reason: String,
}

impl DeletionProposalForm {
    /// Check both fields, reporting every failing field at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let number = self.article_number.trim();
        if number.is_empty() {
            errors.push(FieldError::new("article_number", MSG_ARTICLE_NUMBER_REQUIRED));
        } else if !is_standard_article_number(number) {
            errors.push(FieldError::new("article_number", MSG_ARTICLE_NUMBER_FORMAT));
        }

        let reason = self.reason.trim();
        let length = reason.chars().count();
        if reason.is_empty() {
            errors.push(FieldError::new("reason", MSG_DELETION_REASON_REQUIRED));
        } else if length < DELETION_REASON_MIN_CHARS {
            errors.push(FieldError::new("reason", MSG_DELETION_REASON_TOO_SHORT));
        } else if length > DELETION_REASON_MAX_CHARS {
            errors.push(FieldError::new("reason", MSG_DELETION_REASON_TOO_LONG));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ---------------------------------------------------------------------------
// Approval form
// ---------------------------------------------------------------------------

/// Reviewer form shown next to a pending article.
///
/// Approve is available only once an approval group is chosen. Reject is a
/// two-step action: open the reason field, then confirm once it holds a
/// non-whitespace character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalForm {
    pub approval_group: String,
    pub comment: String,
    pub rejection_reason: String,
    reject_open: bool,
}

impl ApprovalForm {
    /// Start from the group already assigned to the article, if any.
    pub fn for_article(article: &Article) -> Self {
        Self {
            approval_group: article.approval_group.clone(),
            ..Default::default()
        }
    }

    pub fn can_approve(&self) -> bool {
        !self.approval_group.trim().is_empty()
    }

    pub fn open_reject(&mut self) {
        self.reject_open = true;
    }

    pub fn cancel_reject(&mut self) {
        self.reject_open = false;
        self.rejection_reason.clear();
    }

    pub fn is_reject_open(&self) -> bool {
        self.reject_open
    }

    pub fn can_confirm_reject(&self) -> bool {
        self.reject_open && !self.rejection_reason.trim().is_empty()
    }

    /// The approval to submit, or `None` while approve is disabled.
    pub fn approval_decision(&self) -> Option<ApprovalDecision> {
        self.can_approve().then(|| ApprovalDecision {
            approval_group: self.approval_group.trim().to_string(),
            comment: self.comment.clone(),
        })
    }

    /// The rejection to submit, or `None` while confirm is disabled.
    pub fn rejection_decision(&self) -> Option<RejectionDecision> {
        self.can_confirm_reject().then(|| RejectionDecision {
            reason: self.rejection_reason.trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

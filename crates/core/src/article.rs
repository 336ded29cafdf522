//! FAQ article entity, lifecycle status, and article-number helpers.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{ArticleId, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Article numbers
// ---------------------------------------------------------------------------

/// Prefix of ordinary article numbers (`KBA-NNNNN-NNNNN`).
pub const STANDARD_PREFIX: &str = "KBA";

/// Prefix of deletion-proposal article numbers (`DEL-NNNNN-NNNNN`).
pub const DELETION_PREFIX: &str = "DEL";

/// Exclusive upper bound of each numeric segment.
const SEGMENT_MODULUS: i64 = 100_000;

static STANDARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^KBA-[0-9]{5}-[0-9]{5}$").expect("valid regex"));

static DELETION_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^DEL-[0-9]{5}-[0-9]{5}$").expect("valid regex"));

/// Whether `number` has the `KBA-NNNNN-NNNNN` shape.
pub fn is_standard_article_number(number: &str) -> bool {
    STANDARD_NUMBER_RE.is_match(number)
}

/// Whether `number` has the `DEL-NNNNN-NNNNN` shape.
pub fn is_deletion_article_number(number: &str) -> bool {
    DELETION_NUMBER_RE.is_match(number)
}

/// Synthesize an article number: the last five digits of `now` in
/// milliseconds followed by five random digits.
///
/// Callers are responsible for retrying on collision.
pub fn generate_article_number(prefix: &str, now: Timestamp) -> String {
    let stamp = now.timestamp_millis().rem_euclid(SEGMENT_MODULUS);
    let suffix = rand::rng().random_range(0..SEGMENT_MODULUS);
    format!("{prefix}-{stamp:05}-{suffix:05}")
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Draft,
        ArticleStatus::Pending,
        ArticleStatus::Approved,
        ArticleStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Pending => "pending",
            ArticleStatus::Approved => "approved",
            ArticleStatus::Rejected => "rejected",
        }
    }

    /// Display label shown next to a post.
    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "下書き",
            ArticleStatus::Pending => "承認待ち",
            ArticleStatus::Approved => "承認済み",
            ArticleStatus::Rejected => "却下",
        }
    }

    /// Whether an article in this status may move to `next`.
    ///
    /// Same-status moves are re-saves (draft, pending) or overwrites of the
    /// review stamp (approved, rejected). Approved is terminal otherwise.
    pub fn can_transition_to(self, next: ArticleStatus) -> bool {
        use ArticleStatus::{Approved, Draft, Pending, Rejected};
        matches!(
            (self, next),
            (Draft, Draft | Pending)
                | (Pending, Draft | Pending | Approved | Rejected)
                | (Approved, Approved)
                | (Rejected, Draft | Pending | Rejected)
        )
    }

    /// Return an error unless `self -> next` is allowed.
    pub fn ensure_transition(self, next: ArticleStatus) -> Result<(), CoreError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// What an article record represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArticleKind {
    Standard,
    /// A documented request to retire `target`. Approving it never removes
    /// the target article.
    DeletionProposal { target: String },
}

/// Stamp written when a reviewer approves an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStamp {
    pub approved_by: DbId,
    pub approved_at: Timestamp,
    pub comment: String,
}

/// Stamp written when a reviewer rejects an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionStamp {
    pub reason: String,
    pub rejected_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub article_number: String,
    pub kind: ArticleKind,
    pub title: String,
    pub category: String,
    pub approval_group: String,
    pub keywords: Vec<String>,
    pub is_important: bool,
    pub public_start_date: NaiveDate,
    pub public_end_date: NaiveDate,
    pub question: String,
    pub answer: String,
    pub additional_comment: Option<String>,
    pub notes: Option<String>,
    pub status: ArticleStatus,
    pub author_id: DbId,
    pub author_name: String,
    pub created_at: Timestamp,
    pub approval: Option<ApprovalStamp>,
    pub rejection: Option<RejectionStamp>,
}

impl Article {
    pub fn approved_at(&self) -> Option<Timestamp> {
        self.approval.as_ref().map(|a| a.approved_at)
    }

    pub fn is_deletion_proposal(&self) -> bool {
        matches!(self.kind, ArticleKind::DeletionProposal { .. })
    }

    /// Check the status/stamp pairing: an approval stamp exists iff the
    /// article is approved, a rejection stamp iff it is rejected.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        let approved = self.status == ArticleStatus::Approved;
        let rejected = self.status == ArticleStatus::Rejected;

        if approved != self.approval.is_some() {
            return Err(CoreError::Internal(format!(
                "Article {} has status {} but approval stamp present = {}",
                self.article_number,
                self.status,
                self.approval.is_some()
            )));
        }
        if rejected != self.rejection.is_some() {
            return Err(CoreError::Internal(format!(
                "Article {} has status {} but rejection stamp present = {}",
                self.article_number,
                self.status,
                self.rejection.is_some()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(ms: i64) -> Timestamp {
        chrono::Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_standard_number_pattern() {
        assert!(is_standard_article_number("KBA-00001-12345"));
        assert!(!is_standard_article_number("KBA-0001-12345"));
        assert!(!is_standard_article_number("DEL-00001-12345"));
        assert!(!is_standard_article_number(" KBA-00001-12345"));
        assert!(!is_standard_article_number("KBA-00001-1234５"));
    }

    #[test]
    fn test_generated_numbers_match_their_patterns() {
        let now = ts(1_718_000_012_345);
        let kba = generate_article_number(STANDARD_PREFIX, now);
        let del = generate_article_number(DELETION_PREFIX, now);
        assert!(is_standard_article_number(&kba), "got {kba}");
        assert!(is_deletion_article_number(&del), "got {del}");
        assert!(kba.starts_with("KBA-12345-"));
    }

    #[test]
    fn test_generated_number_zero_pads_stamp() {
        let number = generate_article_number(STANDARD_PREFIX, ts(100_000_007));
        assert!(number.starts_with("KBA-00007-"), "got {number}");
    }

    #[test]
    fn test_transition_table() {
        use ArticleStatus::*;
        assert!(Draft.can_transition_to(Pending));
        assert!(Pending.can_transition_to(Draft));
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(Pending));
        assert!(Approved.can_transition_to(Approved));

        assert!(!Draft.can_transition_to(Approved));
        assert!(!Draft.can_transition_to(Rejected));
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ArticleStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        assert_eq!(ArticleStatus::Rejected.label(), "却下");
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let kind = ArticleKind::DeletionProposal {
            target: "KBA-00001-12345".into(),
        };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["type"], "deletion_proposal");
        assert_eq!(json["target"], "KBA-00001-12345");
    }
}

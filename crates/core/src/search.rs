//! Filter/sort engine for the public FAQ search view.
//!
//! [`apply_filters`] is a pure function over a borrowed collection: the same
//! inputs always yield the same ordered output and the input is never
//! mutated.

use std::cmp::Ordering;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::article::{Article, ArticleStatus};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    ArticleNumber,
    CreatedAt,
    ApprovedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Transient search filter. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub keyword: String,
    pub article_number: String,
    pub important_only: bool,
    pub category: String,
    pub approval_group: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Paging parameters (`?skip=&limit=`), applied after filtering and sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Paging {
    /// Slice one page out of an already ordered list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(clamp_offset(self.skip)).unwrap_or(usize::MAX);
        let limit = usize::try_from(clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(limit).collect()
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the visible subset of `articles` for the search view.
///
/// Only approved articles are eligible. Sorting is stable, so articles with
/// equal keys keep their collection order.
pub fn apply_filters<'a>(articles: &'a [Article], filters: &SearchFilters) -> Vec<&'a Article> {
    let keyword = filters.keyword.to_lowercase();

    let mut matched: Vec<&Article> = articles
        .iter()
        .filter(|a| a.status == ArticleStatus::Approved)
        .filter(|a| keyword.is_empty() || matches_keyword(a, &keyword))
        .filter(|a| {
            filters.article_number.is_empty() || a.article_number.contains(&filters.article_number)
        })
        .filter(|a| !filters.important_only || a.is_important)
        .filter(|a| filters.category.is_empty() || a.category == filters.category)
        .filter(|a| filters.approval_group.is_empty() || a.approval_group == filters.approval_group)
        .collect();

    matched.sort_by(|a, b| {
        let ord = compare_by(a, b, filters.sort_by);
        match filters.sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    matched
}

/// Case-insensitive substring match over title, question, answer and each
/// keyword. `needle` must already be lowercased.
pub fn matches_keyword(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article.question.to_lowercase().contains(needle)
        || article.answer.to_lowercase().contains(needle)
        || article
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}

fn compare_by(a: &Article, b: &Article, key: SortKey) -> Ordering {
    match key {
        SortKey::ArticleNumber => a.article_number.cmp(&b.article_number),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::ApprovedAt => approval_sort_key(a).cmp(&approval_sort_key(b)),
    }
}

/// Missing approval timestamps sort as the Unix epoch.
fn approval_sort_key(article: &Article) -> Timestamp {
    article.approved_at().unwrap_or(DateTime::UNIX_EPOCH)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Reference data shapes: article categories and approval groups.

use serde::{Deserialize, Serialize};

/// Category assigned to every deletion proposal.
pub const DELETION_PROPOSAL_CATEGORY: &str = "削除提案";

/// Fallback display color for categories missing from the reference list.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex display color, e.g. `#2563eb`.
    pub color: String,
}

/// Named reviewer pool responsible for approving articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalGroup {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Look up the display color for a category name.
pub fn category_color<'a>(categories: &'a [Category], name: &str) -> &'a str {
    categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.color.as_str())
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

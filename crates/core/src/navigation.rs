//! View-selection state machine and the role capability predicate.
//!
//! [`Navigation`] is a small value: a top-level [`Page`] plus at most one
//! transient [`Overlay`]. Intents move it between states; intents that do
//! not apply to the current state leave it unchanged. Role checks happen in
//! exactly one place, [`can_access`], which [`Navigation::screen`],
//! [`menu_for`], and the choice between the approval and detail screens
//! consult.

use serde::{Deserialize, Serialize};

use crate::types::ArticleId;
use crate::user::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Search,
    Create,
    Pending,
    MyPosts,
    Admin,
}

impl Page {
    /// Header order.
    pub const ALL: [Page; 5] = [
        Page::Search,
        Page::Create,
        Page::MyPosts,
        Page::Pending,
        Page::Admin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Search => "FAQ検索",
            Page::Create => "投稿",
            Page::Pending => "承認待ち",
            Page::MyPosts => "マイ投稿",
            Page::Admin => "管理",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "overlay", rename_all = "snake_case")]
pub enum Overlay {
    PostTypeSelection,
    DeleteProposal,
    ViewingDetail { article_id: ArticleId },
    Approving { article_id: ArticleId },
    Editing { article_id: ArticleId },
}

/// Whatever is currently in front of the user: a page or an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Search,
    Create,
    Pending,
    MyPosts,
    Admin,
    PostTypeSelection,
    DeleteProposal,
    ViewingDetail { article_id: ArticleId },
    Approving { article_id: ArticleId },
    Editing { article_id: ArticleId },
}

impl From<Page> for View {
    fn from(page: Page) -> Self {
        match page {
            Page::Search => View::Search,
            Page::Create => View::Create,
            Page::Pending => View::Pending,
            Page::MyPosts => View::MyPosts,
            Page::Admin => View::Admin,
        }
    }
}

impl From<Overlay> for View {
    fn from(overlay: Overlay) -> Self {
        match overlay {
            Overlay::PostTypeSelection => View::PostTypeSelection,
            Overlay::DeleteProposal => View::DeleteProposal,
            Overlay::ViewingDetail { article_id } => View::ViewingDetail { article_id },
            Overlay::Approving { article_id } => View::Approving { article_id },
            Overlay::Editing { article_id } => View::Editing { article_id },
        }
    }
}

/// The single role gate: the approval queue and approval screen need a
/// reviewer, the admin page needs an admin.
pub fn can_access(user: &User, view: &View) -> bool {
    match view {
        View::Pending | View::Approving { .. } => user.is_reviewer(),
        View::Admin => user.is_admin(),
        _ => true,
    }
}

/// Pages offered in the header for `user`.
pub fn menu_for(user: &User) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| can_access(user, &View::from(*page)))
        .collect()
}

/// What gets rendered: the current view, or an access-denied notice in its
/// place. Denial is an ordinary screen, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Show { view: View },
    AccessDenied { view: View },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Navigate { page: Page },
    SelectModification,
    SelectDeletion,
    Open { article_id: ArticleId },
    Edit { article_id: ArticleId },
    Back,
    Cancel,
    Submitted,
    /// Login or logout.
    Reset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub page: Page,
    pub overlay: Option<Overlay>,
}

impl Navigation {
    fn at(page: Page) -> Self {
        Self {
            page,
            overlay: None,
        }
    }

    fn with_overlay(self, overlay: Overlay) -> Self {
        Self {
            page: self.page,
            overlay: Some(overlay),
        }
    }

    /// Apply `intent` on behalf of `user`, returning the next state.
    pub fn apply(self, user: &User, intent: Intent) -> Self {
        use Intent as I;
        use Overlay as O;

        match (self.overlay, intent) {
            (_, I::Reset) => Self::default(),

            // "Create" always asks what kind of post first.
            (_, I::Navigate { page: Page::Create }) => self.with_overlay(O::PostTypeSelection),
            (_, I::Navigate { page }) => Self::at(page),

            (Some(O::PostTypeSelection), I::SelectModification) => Self::at(Page::Create),
            (Some(O::PostTypeSelection), I::SelectDeletion) => self.with_overlay(O::DeleteProposal),
            (Some(O::PostTypeSelection), I::Back | I::Cancel) => Self::at(Page::Search),

            (Some(O::DeleteProposal), I::Back | I::Cancel) => {
                self.with_overlay(O::PostTypeSelection)
            }
            (Some(O::DeleteProposal), I::Submitted) => Self::at(Page::Search),

            (None, I::Open { article_id })
                if self.page == Page::Pending
                    && can_access(user, &View::Approving { article_id }) =>
            {
                self.with_overlay(O::Approving { article_id })
            }
            (None, I::Open { article_id }) => self.with_overlay(O::ViewingDetail { article_id }),

            (
                None | Some(O::ViewingDetail { .. }) | Some(O::Approving { .. }),
                I::Edit { article_id },
            ) => self.with_overlay(O::Editing { article_id }),

            (
                Some(O::ViewingDetail { .. }) | Some(O::Approving { .. }) | Some(O::Editing { .. }),
                I::Back | I::Cancel | I::Submitted,
            ) => Self::at(self.page),

            (None, I::Cancel | I::Submitted) if self.page == Page::Create => Self::at(Page::Search),

            _ => self,
        }
    }

    pub fn view(&self) -> View {
        match self.overlay {
            Some(overlay) => overlay.into(),
            None => self.page.into(),
        }
    }

    pub fn screen(&self, user: &User) -> Screen {
        let view = self.view();
        if can_access(user, &view) {
            Screen::Show { view }
        } else {
            Screen::AccessDenied { view }
        }
    }
}

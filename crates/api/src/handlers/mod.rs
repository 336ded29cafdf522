pub mod approvals;
pub mod articles;
pub mod auth;
pub mod my_posts;
pub mod navigation;
pub mod reference;

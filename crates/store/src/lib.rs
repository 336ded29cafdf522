//! In-memory storage for the FAQ desk.
//!
//! - [`store::ArticleStore`] -- the canonical article collection.
//! - [`directory::Directory`] -- user lookup and reference data.
//! - [`fixtures`] -- the static seed data both are built from.

pub mod directory;
pub mod fixtures;
pub mod store;

pub use directory::{Directory, FixtureDirectory};
pub use store::ArticleStore;

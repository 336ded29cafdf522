//! Domain layer for the FAQ desk: article model, search engine, lifecycle
//! reducers, form state, view projections, and navigation.
//!
//! Nothing in this crate performs I/O. Every operation takes its inputs
//! (including the current time) explicitly so results are deterministic.

pub mod article;
pub mod error;
pub mod forms;
pub mod lifecycle;
pub mod navigation;
pub mod reference;
pub mod roles;
pub mod search;
pub mod types;
pub mod user;
pub mod views;

#[cfg(test)]
mod testing;

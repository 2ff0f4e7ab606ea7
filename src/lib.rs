//! Suggest-RS: a content-repository search suggestion service
//!
//! Answers autocomplete requests by binding a user-typed term into a cached
//! per-context query template and asking a remote search index for
//! completions and suggestions.

pub mod cache;
pub mod config;
pub mod repository;
pub mod search;
pub mod suggest;
pub mod web;

pub use config::Settings;
pub use repository::{ContentRepository, Node};
pub use suggest::{SuggestResult, SuggestService};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for search backend requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;

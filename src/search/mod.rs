//! Search backend module
//!
//! HTTP client for the Elasticsearch-compatible index that serves
//! completions and suggestions.

mod client;

pub use client::SearchClient;

//! Suggestion query module
//!
//! Builds per-context completion/suggestion queries from cached templates,
//! executes them against the search backend, and reshapes the response.

mod builder;
mod service;

pub use builder::{extract_completions, extract_suggestions, SuggestionRequestBuilder};
pub use service::SuggestService;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Failures while building or executing a suggestion query
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The context identifier does not resolve to a node
    #[error("unknown context node: {0}")]
    UnknownNode(String),

    /// The query template could not be encoded
    #[error("could not encode query template: {0}")]
    Template(#[source] serde_json::Error),

    /// The search backend call failed (connect, status, or body decode)
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Payload returned for every suggestion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResult {
    /// Completion terms from the autocomplete aggregation, in bucket order
    pub completions: Vec<String>,
    /// Options of the first suggestion group, verbatim
    pub suggestions: Vec<Value>,
    /// Present only when the request could not be answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SuggestResult {
    /// Successful payload
    pub fn new(completions: Vec<String>, suggestions: Vec<Value>) -> Self {
        Self {
            completions,
            suggestions,
            errors: None,
        }
    }

    /// Degraded payload carrying a single error message and no data
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            completions: vec![],
            suggestions: vec![],
            errors: Some(vec![message.into()]),
        }
    }
}

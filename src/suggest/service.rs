//! Suggestion request execution

use super::builder::{extract_completions, extract_suggestions, SuggestionRequestBuilder};
use super::SuggestResult;
use crate::search::SearchClient;
use serde_json::Value;
use tracing::{debug, warn};

/// Message reported whenever the query cannot be answered
const EXECUTION_ERROR: &str = "Could not execute query";

/// Message reported for a term of the wrong type
const TERM_TYPE_ERROR: &str = "term has to be a string";

/// Answers suggestion requests end to end
pub struct SuggestService {
    builder: SuggestionRequestBuilder,
    client: SearchClient,
}

impl SuggestService {
    /// Create a new service
    pub fn new(builder: SuggestionRequestBuilder, client: SearchClient) -> Self {
        Self { builder, client }
    }

    /// Answer one suggestion request.
    ///
    /// Never fails: a non-string term short-circuits with a validation
    /// message before anything is sent, and every execution failure degrades
    /// to a payload carrying one generic error, with the cause logged.
    pub async fn run(&self, term: &Value, context_id: &str) -> SuggestResult {
        let Some(term) = term.as_str() else {
            return SuggestResult::error(TERM_TYPE_ERROR);
        };

        match self.execute(term, context_id).await {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    "suggestion query for context '{}' failed: {:#}",
                    context_id, error
                );
                SuggestResult::error(EXECUTION_ERROR)
            }
        }
    }

    async fn execute(&self, term: &str, context_id: &str) -> anyhow::Result<SuggestResult> {
        let request = self.builder.build_request(term, context_id).await?;
        let response = self.client.search(&request).await?;

        debug!("search backend answered for context '{}'", context_id);

        Ok(SuggestResult::new(
            extract_completions(&response),
            extract_suggestions(&response),
        ))
    }
}

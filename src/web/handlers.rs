//! HTTP request handlers

use super::state::AppState;
use crate::suggest::SuggestResult;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

/// Parameters for a suggestion request
///
/// `term` stays untyped here: rejecting non-string terms is part of the
/// action contract, not the deserializer's job.
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    #[serde(rename = "contextNodeIdentifier")]
    pub context_node_identifier: String,
    pub term: serde_json::Value,
}

/// Suggestion handler
pub async fn suggest(
    State(state): State<AppState>,
    Json(params): Json<SuggestParams>,
) -> Json<SuggestResult> {
    let result = state
        .suggest
        .run(&params.term, &params.context_node_identifier)
        .await;

    Json(result)
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}

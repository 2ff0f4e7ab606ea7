//! Per-context query template construction and term binding

use crate::cache::TemplateCache;
use crate::repository::ContentRepository;
use crate::suggest::SuggestError;
use serde_json::{json, Value};
use std::sync::Arc;

/// Token bound to the user's term at request time.
///
/// The random suffix keeps the token out of any legitimate template content.
const TERM_PLACEHOLDER: &str = "---term-ahqu2ooQuo---";

/// Builds ready-to-send suggestion queries for context nodes
pub struct SuggestionRequestBuilder {
    repository: Arc<dyn ContentRepository>,
    templates: TemplateCache,
    workspace: String,
}

impl SuggestionRequestBuilder {
    /// Create a builder for one workspace
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        templates: TemplateCache,
        workspace: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            templates,
            workspace: workspace.into(),
        }
    }

    /// Build the query for a term within a context.
    ///
    /// The template is constructed at most once per context identifier and
    /// cache lifetime; subsequent requests only rebind the term. Terms are
    /// lowercased to match index-time normalization.
    pub async fn build_request(&self, term: &str, context_id: &str) -> Result<Value, SuggestError> {
        let term = term.to_lowercase();

        let template = self
            .templates
            .get_or_compute(context_id, || self.build_template(context_id))
            .await?;

        Ok(bind_term(&template, &term))
    }

    /// Construct the template document for one context node
    async fn build_template(&self, context_id: &str) -> Result<Value, SuggestError> {
        let node = self
            .repository
            .node_by_identifier(&self.workspace, context_id)
            .await
            .ok_or_else(|| SuggestError::UnknownNode(context_id.to_string()))?;

        let dimension_hash = node
            .dimension_combination_hash()
            .map_err(SuggestError::Template)?;

        Ok(json!({
            "query": {
                "bool": {
                    "filter": [
                        { "term": { "__workspace": self.workspace } },
                        { "term": { "__parentPath": node.path } },
                        { "term": { "__dimensionCombinationHash": dimension_hash } },
                        { "prefix": { "__completion": TERM_PLACEHOLDER } }
                    ]
                }
            },
            // hits are irrelevant, completions come from the aggregation
            "size": 1,
            "aggs": {
                "autocomplete": {
                    "terms": {
                        "field": "__completion",
                        "order": { "_count": "desc" },
                        "size": 10,
                        "include": format!("{}.*", TERM_PLACEHOLDER)
                    }
                }
            },
            "suggest": {
                "suggestions": {
                    "text": TERM_PLACEHOLDER,
                    "completion": {
                        "field": "__suggestions",
                        "fuzzy": true,
                        "context": {
                            "parentPath": node.path,
                            "workspace": self.workspace,
                            "dimensionCombinationHash": dimension_hash
                        }
                    }
                }
            }
        }))
    }
}

/// Bind the term into a template by rewriting its string leaves.
///
/// Substitution never touches keys or non-string values, so the placeholder
/// cannot be confused with document structure.
fn bind_term(template: &Value, term: &str) -> Value {
    match template {
        Value::String(s) if s.contains(TERM_PLACEHOLDER) => {
            Value::String(s.replace(TERM_PLACEHOLDER, term))
        }
        Value::Array(items) => Value::Array(items.iter().map(|item| bind_term(item, term)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), bind_term(value, term)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Extract completion terms from the autocomplete aggregation
pub fn extract_completions(response: &Value) -> Vec<String> {
    response
        .get("aggregations")
        .and_then(|aggs| aggs.get("autocomplete"))
        .and_then(|agg| agg.get("buckets"))
        .and_then(|buckets| buckets.as_array())
        .map(|buckets| {
            buckets
                .iter()
                .filter_map(|bucket| bucket.get("key").and_then(|key| key.as_str()))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Extract the options of the first suggestion group, verbatim
pub fn extract_suggestions(response: &Value) -> Vec<Value> {
    response
        .get("suggest")
        .and_then(|suggest| suggest.get("suggestions"))
        .and_then(|groups| groups.get(0))
        .and_then(|group| group.get("options"))
        .and_then(|options| options.as_array())
        .map(|options| options.to_vec())
        .unwrap_or_default()
}

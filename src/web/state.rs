//! Application state shared across handlers

use crate::cache::TemplateCache;
use crate::config::Settings;
use crate::repository::InMemoryRepository;
use crate::search::SearchClient;
use crate::suggest::{SuggestService, SuggestionRequestBuilder};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Suggestion service
    pub suggest: Arc<SuggestService>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let repository = Arc::new(InMemoryRepository::from_settings(&settings.repository));
        let templates =
            TemplateCache::new(settings.cache.template_ttl, settings.cache.max_capacity);
        let builder = SuggestionRequestBuilder::new(
            repository,
            templates,
            settings.repository.workspace.clone(),
        );
        let client = SearchClient::with_settings(&settings.search)?;
        let suggest = Arc::new(SuggestService::new(builder, client));

        Ok(Self {
            settings: Arc::new(settings),
            suggest,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}

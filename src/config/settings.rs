//! Settings structures for Suggest-RS configuration

use crate::repository::Node;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub cache: CacheSettings,
    pub repository: RepositorySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            search: SearchSettings::default(),
            cache: CacheSettings::default(),
            repository: RepositorySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SUGGEST_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SUGGEST_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("SUGGEST_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SUGGEST_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SUGGEST_SEARCH_ENDPOINT") {
            self.search.endpoint = val;
        }
        if let Ok(val) = std::env::var("SUGGEST_SEARCH_INDEX") {
            self.search.index = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name reported by the health endpoint
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Suggest-RS".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8889,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Search backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the search backend
    pub endpoint: String,
    /// Index queried for completions and suggestions
    pub index: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9200".to_string(),
            index: "content".to_string(),
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
        }
    }
}

/// Query template cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Template time-to-live in seconds (0 = never expire)
    pub template_ttl: u64,
    /// Maximum number of cached templates
    pub max_capacity: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            template_ttl: 0,
            max_capacity: 1000,
        }
    }
}

/// Content repository settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySettings {
    /// Workspace the suggestion index is built from
    pub workspace: String,
    /// Nodes addressable as suggestion contexts
    pub nodes: Vec<Node>,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            workspace: "live".to_string(),
            nodes: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8889);
        assert_eq!(settings.search.index, "content");
        assert_eq!(settings.repository.workspace, "live");
        assert_eq!(settings.cache.template_ttl, 0);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
general:
  debug: true
server:
  port: 9000
search:
  endpoint: "http://search.internal:9200"
  index: "site"
repository:
  workspace: live
  nodes:
    - identifier: "home"
      path: "/sites/example"
      dimensions:
        language: ["en_US"]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.general.debug);
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.search.endpoint, "http://search.internal:9200");
        assert_eq!(settings.search.index, "site");
        assert_eq!(settings.repository.nodes.len(), 1);
        assert_eq!(settings.repository.nodes[0].path, "/sites/example");
        // unset sections fall back to defaults
        assert_eq!(settings.cache.max_capacity, 1000);
    }
}

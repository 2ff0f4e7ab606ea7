//! Content repository collaborator
//!
//! The suggestion index is scoped to nodes of a content tree. The real
//! repository lives outside this service; we only need to resolve a node
//! identifier to its path and dimension combination within one workspace.

use crate::config::RepositorySettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A node of the content tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, used as suggestion context key
    pub identifier: String,
    /// Absolute path within the content tree
    pub path: String,
    /// Active dimension combination, e.g. language -> [en_US]
    ///
    /// Ordered map so the JSON encoding, and with it the hash, is stable.
    #[serde(default)]
    pub dimensions: BTreeMap<String, Vec<String>>,
}

impl Node {
    /// Create a node without dimensions
    pub fn new(identifier: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            path: path.into(),
            dimensions: BTreeMap::new(),
        }
    }

    /// Hash of the active dimension combination, as indexed
    ///
    /// Lowercase hex MD5 of the JSON-encoded dimension map.
    pub fn dimension_combination_hash(&self) -> serde_json::Result<String> {
        let encoded = serde_json::to_string(&self.dimensions)?;
        Ok(format!("{:x}", md5::compute(encoded)))
    }
}

/// Lookup of nodes by identifier within a workspace
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Resolve a node by identifier, or `None` if unknown
    async fn node_by_identifier(&self, workspace: &str, identifier: &str) -> Option<Node>;
}

/// Repository backed by the node list from the settings file
pub struct InMemoryRepository {
    workspace: String,
    nodes: HashMap<String, Node>,
}

impl InMemoryRepository {
    /// Create a repository for a single workspace
    pub fn new(workspace: impl Into<String>, nodes: Vec<Node>) -> Self {
        let nodes = nodes
            .into_iter()
            .map(|node| (node.identifier.clone(), node))
            .collect();

        Self {
            workspace: workspace.into(),
            nodes,
        }
    }

    /// Create a repository from repository settings
    pub fn from_settings(settings: &RepositorySettings) -> Self {
        Self::new(settings.workspace.clone(), settings.nodes.clone())
    }

    /// Number of known nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn node_by_identifier(&self, workspace: &str, identifier: &str) -> Option<Node> {
        if workspace != self.workspace {
            return None;
        }

        self.nodes.get(identifier).cloned()
    }
}

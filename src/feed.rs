//! Inbound data feed: one owner's labels and entries
//!
//! The feed is the boundary with whatever keeps the real records. It can be
//! read from JSON or YAML:
//!
//! ```yaml
//! labels:
//!   - { id: 1, name: flying, frequency: 2 }
//!   - { id: 2, name: water, frequency: 1 }
//! entries:
//!   - { id: 10, labels: [1, 2] }
//!   - { id: 11, labels: [1] }
//! ```

use crate::graph::{normalize_label_name, Entry, Graph, Label, LabelId};
use crate::journal::{recompute_and_prune, PruneScope};
use crate::query::{connections_for, Connection, Statistic, StatisticsDeriver};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported feed format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Snapshot of one owner's labels and entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Feed {
    pub fn new(labels: Vec<Label>, entries: Vec<Entry>) -> Self {
        Self { labels, entries }
    }

    pub fn from_json_str(json: &str) -> FeedResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> FeedResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a feed file, choosing the parser by extension
    pub fn from_path(path: impl AsRef<Path>) -> FeedResult<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let feed = match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            "yaml" | "yml" => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(FeedError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            path = %path.display(),
            labels = feed.labels.len(),
            entries = feed.entries.len(),
            "loaded feed"
        );
        Ok(feed)
    }

    /// Overwrite label frequencies with counts taken from the entries
    pub fn recount(&mut self) {
        recompute_and_prune(&mut self.labels, &self.entries, PruneScope::None);
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    /// Find a label by name (normalized before comparing)
    pub fn label_by_name(&self, name: &str) -> Option<&Label> {
        let name = normalize_label_name(name);
        self.labels.iter().find(|l| l.name == name)
    }

    pub fn build_graph(&self) -> Graph {
        Graph::build(&self.labels, &self.entries)
    }

    pub fn statistics(&self, include_entry_ids: bool) -> Vec<Statistic> {
        StatisticsDeriver::new()
            .with_entry_ids(include_entry_ids)
            .derive(&self.build_graph())
    }

    pub fn connections(&self, label: LabelId) -> Vec<Connection> {
        connections_for(label, &self.labels, &self.entries)
    }
}

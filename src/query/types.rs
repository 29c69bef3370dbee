//! Derived connection and statistic values

use crate::graph::{EntryId, LabelId};
use serde::{Deserialize, Serialize};

/// A co-occurrence link from one label to another
///
/// `strength` always equals the number of shared entries; the constructor
/// recomputes it rather than trusting the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConnectionRecord")]
pub struct Connection {
    label_id: LabelId,
    label_name: String,
    shared_entry_ids: Vec<EntryId>,
    strength: usize,
}

impl Connection {
    /// Create a connection. A `strength` that disagrees with
    /// `shared_entry_ids` is replaced by the true count.
    pub fn new(
        label_id: LabelId,
        label_name: impl Into<String>,
        shared_entry_ids: Vec<EntryId>,
        strength: usize,
    ) -> Self {
        let label_name = label_name.into();
        let actual = shared_entry_ids.len();
        if strength != actual {
            tracing::debug!(
                label = %label_id,
                claimed = strength,
                actual,
                "connection strength corrected"
            );
        }
        Self {
            label_id,
            label_name,
            shared_entry_ids,
            strength: actual,
        }
    }

    /// Create a connection whose strength is taken from the shared entries
    pub fn from_shared(
        label_id: LabelId,
        label_name: impl Into<String>,
        shared_entry_ids: Vec<EntryId>,
    ) -> Self {
        let strength = shared_entry_ids.len();
        Self::new(label_id, label_name, shared_entry_ids, strength)
    }

    /// The connected (neighbor) label
    pub fn label_id(&self) -> LabelId {
        self.label_id
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn shared_entry_ids(&self) -> &[EntryId] {
        &self.shared_entry_ids
    }

    /// Number of entries shared with the neighbor
    pub fn strength(&self) -> usize {
        self.strength
    }
}

/// Wire form of [`Connection`]; goes through the correcting constructor.
#[derive(Deserialize)]
struct ConnectionRecord {
    label_id: LabelId,
    label_name: String,
    #[serde(default)]
    shared_entry_ids: Vec<EntryId>,
    #[serde(default)]
    strength: usize,
}

impl From<ConnectionRecord> for Connection {
    fn from(r: ConnectionRecord) -> Self {
        Connection::new(r.label_id, r.label_name, r.shared_entry_ids, r.strength)
    }
}

/// Per-label summary for word-map style views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub id: LabelId,
    pub name: String,
    /// Entries carrying the label
    pub frequency: u32,
    /// Distinct neighbors, before truncation
    pub total_connections: usize,
    /// Strongest neighbors, at most [`crate::TOP_CONNECTIONS`]
    pub top_connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_entry_ids: Option<Vec<EntryId>>,
}

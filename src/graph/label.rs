//! Labels and the entries that carry them

use super::ids::{EntryId, LabelId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Normalize a label name: surrounding whitespace trimmed, case folded.
pub fn normalize_label_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A short descriptor attachable to many entries of one owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Unique identifier
    pub id: LabelId,
    /// Normalized (case-folded) name
    #[serde(deserialize_with = "deserialize_normalized")]
    pub name: String,
    /// Number of entries currently carrying this label.
    ///
    /// Maintained by the caller (see [`crate::recompute_and_prune`]); the
    /// graph builder only echoes it.
    #[serde(default)]
    pub frequency: u32,
}

impl Label {
    /// Create a label, normalizing its name
    pub fn new(id: impl Into<LabelId>, name: &str, frequency: u32) -> Self {
        Self {
            id: id.into(),
            name: normalize_label_name(name),
            frequency,
        }
    }
}

/// A journal record carrying zero or more labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,
    /// Attached labels, unique, in first-seen order
    #[serde(default, deserialize_with = "deserialize_unique")]
    labels: Vec<LabelId>,
}

impl Entry {
    /// Create an entry; repeated label ids are dropped.
    pub fn new(id: impl Into<EntryId>, labels: impl IntoIterator<Item = LabelId>) -> Self {
        Self {
            id: id.into(),
            labels: unique_in_order(labels),
        }
    }

    /// Attached label ids
    pub fn labels(&self) -> &[LabelId] {
        &self.labels
    }

    pub fn has_label(&self, label: LabelId) -> bool {
        self.labels.contains(&label)
    }

    /// Attach a label. Returns false if it was already attached.
    pub fn attach(&mut self, label: LabelId) -> bool {
        if self.has_label(label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Detach a label. Returns false if it was not attached.
    pub fn detach(&mut self, label: LabelId) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| *l != label);
        self.labels.len() != before
    }

    /// Replace all attached labels
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = LabelId>) {
        self.labels = unique_in_order(labels);
    }
}

fn unique_in_order(labels: impl IntoIterator<Item = LabelId>) -> Vec<LabelId> {
    let mut seen = HashSet::new();
    labels.into_iter().filter(|l| seen.insert(*l)).collect()
}

fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_label_name(&raw))
}

fn deserialize_unique<'de, D>(deserializer: D) -> Result<Vec<LabelId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<LabelId>::deserialize(deserializer)?;
    Ok(unique_in_order(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_name_is_case_folded() {
        let label = Label::new(1, "  Flying ", 0);
        assert_eq!(label.name, "flying");
    }

    #[test]
    fn entry_drops_repeated_labels() {
        let entry = Entry::new(1, [LabelId::new(3), LabelId::new(1), LabelId::new(3)]);
        assert_eq!(entry.labels(), &[LabelId::new(3), LabelId::new(1)]);
    }

    #[test]
    fn attach_and_detach() {
        let mut entry = Entry::new(1, Vec::<LabelId>::new());
        assert!(entry.attach(LabelId::new(7)));
        assert!(!entry.attach(LabelId::new(7)));
        assert!(entry.has_label(LabelId::new(7)));
        assert!(entry.detach(LabelId::new(7)));
        assert!(!entry.detach(LabelId::new(7)));
        assert!(entry.labels().is_empty());
    }

    #[test]
    fn deserialize_normalizes_and_dedups() {
        let label: Label = serde_json::from_str(r#"{"id": 4, "name": "Water"}"#).unwrap();
        assert_eq!(label.name, "water");
        assert_eq!(label.frequency, 0);

        let entry: Entry = serde_json::from_str(r#"{"id": 9, "labels": [4, 5, 4]}"#).unwrap();
        assert_eq!(entry.labels(), &[LabelId::new(4), LabelId::new(5)]);
    }
}

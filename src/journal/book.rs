//! Journal: one owner's labels and entries, kept in memory
//!
//! Every mutation that changes label attachments ends with an explicit call
//! to [`recompute_and_prune`], so label frequencies are always current when
//! a graph is built from [`Journal::to_feed`].

use super::bookkeeping::{recompute_and_prune, PruneScope};
use super::error::{JournalError, JournalResult};
use crate::config::JournalConfig;
use crate::feed::Feed;
use crate::graph::{normalize_label_name, Entry, EntryId, Graph, Label, LabelId, OwnerId};
use crate::query::{connections_for, derive_statistics, Connection, Statistic};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An entry with its journal metadata
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    #[serde(flatten)]
    entry: Entry,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn id(&self) -> EntryId {
        self.entry.id
    }

    pub fn labels(&self) -> &[LabelId] {
        self.entry.labels()
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }
}

/// One owner's journal
#[derive(Debug, Clone)]
pub struct Journal {
    owner: OwnerId,
    config: JournalConfig,
    /// Kept sorted by name; names are unique
    labels: Vec<Label>,
    entries: Vec<JournalEntry>,
    next_label_id: u64,
    next_entry_id: u64,
}

impl Journal {
    pub fn new(owner: OwnerId) -> Self {
        Self::with_config(owner, JournalConfig::default())
    }

    pub fn with_config(owner: OwnerId, config: JournalConfig) -> Self {
        Self {
            owner,
            config,
            labels: Vec::new(),
            entries: Vec::new(),
            next_label_id: 1,
            next_entry_id: 1,
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    // === Labels ===

    /// Create a label, or return the existing one with the same normalized name
    pub fn create_label(&mut self, name: &str) -> JournalResult<LabelId> {
        let name = self.validated_name(name)?;
        Ok(self.insert_label(name))
    }

    /// All labels, alphabetical
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn label_by_name(&self, name: &str) -> Option<&Label> {
        let name = normalize_label_name(name);
        self.labels
            .binary_search_by(|l| l.name.as_str().cmp(name.as_str()))
            .ok()
            .map(|idx| &self.labels[idx])
    }

    fn validated_name(&self, raw: &str) -> JournalResult<String> {
        let name = normalize_label_name(raw);
        let len = name.chars().count();
        if len < self.config.min_label_len {
            return Err(JournalError::InvalidLabelName {
                name: raw.to_string(),
                reason: format!("must be at least {} characters", self.config.min_label_len),
            });
        }
        if len > self.config.max_label_len {
            return Err(JournalError::InvalidLabelName {
                name: raw.to_string(),
                reason: format!("must be at most {} characters", self.config.max_label_len),
            });
        }
        Ok(name)
    }

    fn insert_label(&mut self, name: String) -> LabelId {
        match self.labels.binary_search_by(|l| l.name.cmp(&name)) {
            Ok(idx) => self.labels[idx].id,
            Err(idx) => {
                let id = LabelId::new(self.next_label_id);
                self.next_label_id += 1;
                tracing::info!(owner = %self.owner, label = %id, name = %name, "created label");
                self.labels.insert(
                    idx,
                    Label {
                        id,
                        name,
                        frequency: 0,
                    },
                );
                id
            }
        }
    }

    /// Validate, deduplicate and create labels for a list of names.
    /// Blank names are skipped. Nothing is created if any name is invalid.
    fn resolve_names(&mut self, names: &[&str]) -> JournalResult<Vec<LabelId>> {
        let valid = names
            .iter()
            .filter(|n| !n.trim().is_empty())
            .map(|n| self.validated_name(n))
            .collect::<JournalResult<Vec<String>>>()?;
        Ok(valid.into_iter().map(|n| self.insert_label(n)).collect())
    }

    fn ensure_labels_exist(&self, ids: &[LabelId]) -> JournalResult<()> {
        match ids.iter().find(|id| self.label(**id).is_none()) {
            Some(missing) => Err(JournalError::LabelNotFound(*missing)),
            None => Ok(()),
        }
    }

    // === Entries ===

    /// Create an entry, creating any labels named that don't exist yet
    pub fn create_entry(
        &mut self,
        description: impl Into<String>,
        label_names: &[&str],
    ) -> JournalResult<EntryId> {
        let label_ids = self.resolve_names(label_names)?;

        let id = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;
        let now = Utc::now();
        self.entries.push(JournalEntry {
            entry: Entry::new(id, label_ids),
            description: description.into(),
            created_at: now,
            updated_at: now,
        });

        self.recompute(PruneScope::None);
        Ok(id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    fn entry_mut(&mut self, id: EntryId) -> JournalResult<&mut JournalEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(JournalError::EntryNotFound(id))
    }

    /// All entries, newest first
    pub fn entries(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id().cmp(&a.id()))
        });
        entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn update_description(
        &mut self,
        id: EntryId,
        description: impl Into<String>,
    ) -> JournalResult<()> {
        let entry = self.entry_mut(id)?;
        entry.description = description.into();
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Replace an entry's labels. Labels that were removed and are now on no
    /// entry are deleted; the deleted labels are returned.
    pub fn set_entry_labels(&mut self, id: EntryId, labels: &[LabelId]) -> JournalResult<Vec<Label>> {
        self.ensure_labels_exist(labels)?;
        let entry = self.entry_mut(id)?;
        let removed: Vec<LabelId> = entry
            .labels()
            .iter()
            .copied()
            .filter(|l| !labels.contains(l))
            .collect();
        entry.entry.set_labels(labels.iter().copied());
        entry.updated_at = Utc::now();

        Ok(self.recompute(PruneScope::Touched(removed)))
    }

    /// Replace an entry's labels by name, creating labels as needed
    pub fn set_entry_label_names(&mut self, id: EntryId, names: &[&str]) -> JournalResult<Vec<Label>> {
        self.entry_mut(id)?;
        let ids = self.resolve_names(names)?;
        self.set_entry_labels(id, &ids)
    }

    /// Attach an existing label. Returns false if it was already attached.
    pub fn attach_label(&mut self, id: EntryId, label: LabelId) -> JournalResult<bool> {
        self.ensure_labels_exist(&[label])?;
        let entry = self.entry_mut(id)?;
        let attached = entry.entry.attach(label);
        if attached {
            entry.updated_at = Utc::now();
            self.recompute(PruneScope::None);
        }
        Ok(attached)
    }

    /// Detach a label. Returns false if it was not attached. A label left on
    /// no entry is deleted.
    pub fn detach_label(&mut self, id: EntryId, label: LabelId) -> JournalResult<bool> {
        self.ensure_labels_exist(&[label])?;
        let entry = self.entry_mut(id)?;
        let detached = entry.entry.detach(label);
        if detached {
            entry.updated_at = Utc::now();
            self.recompute(PruneScope::Touched(vec![label]));
        }
        Ok(detached)
    }

    /// Delete an entry. Every label left on no entry is deleted and returned.
    pub fn delete_entry(&mut self, id: EntryId) -> JournalResult<Vec<Label>> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(JournalError::EntryNotFound(id))?;
        self.entries.remove(idx);
        tracing::info!(owner = %self.owner, entry = %id, "deleted entry");

        Ok(self.recompute(PruneScope::All))
    }

    /// Entries carrying a label, newest first
    pub fn entries_with_label(&self, label: LabelId) -> Vec<&JournalEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.entry.has_label(label))
            .collect()
    }

    /// Entries whose description or label names contain `term`
    /// (case-insensitive), newest first. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&JournalEntry> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.entries();
        }
        self.entries()
            .into_iter()
            .filter(|e| {
                e.description.to_lowercase().contains(&term)
                    || e.labels().iter().any(|id| {
                        self.label(*id)
                            .map_or(false, |l| l.name.contains(&term))
                    })
            })
            .collect()
    }

    fn recompute(&mut self, scope: PruneScope) -> Vec<Label> {
        let entries: Vec<Entry> = self.entries.iter().map(|e| e.entry.clone()).collect();
        let pruned = recompute_and_prune(&mut self.labels, &entries, scope);
        for label in &pruned {
            tracing::info!(owner = %self.owner, label = %label.id, name = %label.name, "deleted orphaned label");
        }
        pruned
    }

    // === Co-occurrence ===

    /// Snapshot for the core: labels alphabetical, entries newest first
    pub fn to_feed(&self) -> Feed {
        Feed::new(
            self.labels.clone(),
            self.entries().into_iter().map(|e| e.entry.clone()).collect(),
        )
    }

    pub fn graph(&self) -> Graph {
        self.to_feed().build_graph()
    }

    pub fn statistics(&self) -> Vec<Statistic> {
        derive_statistics(&self.graph())
    }

    /// Connections of one label, strongest first
    pub fn connections(&self, label: LabelId) -> JournalResult<Vec<Connection>> {
        self.ensure_labels_exist(&[label])?;
        let feed = self.to_feed();
        Ok(connections_for(label, &feed.labels, &feed.entries))
    }
}

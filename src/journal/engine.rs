//! CooccurrenceEngine: journals for many owners
//!
//! Owners are independent; reads and writes for different owners proceed in
//! parallel. Graph building always runs on a cloned snapshot, outside any
//! lock.

use super::book::Journal;
use super::error::{JournalError, JournalResult};
use crate::config::JournalConfig;
use crate::feed::Feed;
use crate::graph::{Graph, LabelId, OwnerId};
use crate::query::{connections_for, Connection, Statistic, StatisticsDeriver};
use dashmap::DashMap;

/// Manages one journal per owner
#[derive(Debug, Default)]
pub struct CooccurrenceEngine {
    journals: DashMap<OwnerId, Journal>,
    config: JournalConfig,
}

impl CooccurrenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose new journals use `config`
    pub fn with_config(config: JournalConfig) -> Self {
        Self {
            journals: DashMap::new(),
            config,
        }
    }

    /// Create an empty journal for `owner` unless one exists.
    /// Returns true if a journal was created.
    pub fn open_journal(&self, owner: OwnerId) -> bool {
        let mut created = false;
        self.journals.entry(owner).or_insert_with(|| {
            created = true;
            Journal::with_config(owner, self.config.clone())
        });
        created
    }

    /// Insert or replace a journal
    pub fn upsert_journal(&self, journal: Journal) -> OwnerId {
        let owner = journal.owner();
        self.journals.insert(owner, journal);
        owner
    }

    pub fn remove_journal(&self, owner: OwnerId) -> Option<Journal> {
        self.journals.remove(&owner).map(|(_, journal)| journal)
    }

    pub fn has_journal(&self, owner: OwnerId) -> bool {
        self.journals.contains_key(&owner)
    }

    pub fn journal_count(&self) -> usize {
        self.journals.len()
    }

    pub fn owners(&self) -> Vec<OwnerId> {
        self.journals.iter().map(|r| *r.key()).collect()
    }

    /// Read a journal
    pub fn with_journal<R>(&self, owner: OwnerId, f: impl FnOnce(&Journal) -> R) -> JournalResult<R> {
        let journal = self
            .journals
            .get(&owner)
            .ok_or(JournalError::JournalNotFound(owner))?;
        Ok(f(&*journal))
    }

    /// Modify a journal
    pub fn with_journal_mut<R>(
        &self,
        owner: OwnerId,
        f: impl FnOnce(&mut Journal) -> R,
    ) -> JournalResult<R> {
        let mut journal = self
            .journals
            .get_mut(&owner)
            .ok_or(JournalError::JournalNotFound(owner))?;
        Ok(f(&mut *journal))
    }

    fn snapshot(&self, owner: OwnerId) -> JournalResult<Feed> {
        self.with_journal(owner, Journal::to_feed)
    }

    pub fn graph(&self, owner: OwnerId) -> JournalResult<Graph> {
        Ok(self.snapshot(owner)?.build_graph())
    }

    pub fn statistics(&self, owner: OwnerId, include_entry_ids: bool) -> JournalResult<Vec<Statistic>> {
        let graph = self.graph(owner)?;
        Ok(StatisticsDeriver::new()
            .with_entry_ids(include_entry_ids)
            .derive(&graph))
    }

    pub fn connections(&self, owner: OwnerId, label: LabelId) -> JournalResult<Vec<Connection>> {
        let feed = self.snapshot(owner)?;
        if !feed.labels.iter().any(|l| l.id == label) {
            return Err(JournalError::LabelNotFound(label));
        }
        Ok(connections_for(label, &feed.labels, &feed.entries))
    }
}

//! Frequency recount and orphan pruning
//!
//! Callers run this after any change to entry/label attachments so that
//! `Label::frequency` matches the entries before a graph is built.

use crate::graph::{Entry, Label, LabelId};
use std::collections::HashMap;

/// Which zero-frequency labels to remove after a recount
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PruneScope {
    /// Recount only
    #[default]
    None,
    /// Remove these labels if nothing carries them any more
    Touched(Vec<LabelId>),
    /// Remove every label nothing carries
    All,
}

impl PruneScope {
    fn covers(&self, id: LabelId) -> bool {
        match self {
            PruneScope::None => false,
            PruneScope::Touched(ids) => ids.contains(&id),
            PruneScope::All => true,
        }
    }
}

/// Recount every label's frequency from `entries`, then drop the
/// zero-frequency labels covered by `scope`. Returns the dropped labels.
pub fn recompute_and_prune(
    labels: &mut Vec<Label>,
    entries: &[Entry],
    scope: PruneScope,
) -> Vec<Label> {
    let mut counts: HashMap<LabelId, u32> = HashMap::new();
    for entry in entries {
        for &label in entry.labels() {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    for label in labels.iter_mut() {
        label.frequency = counts.get(&label.id).copied().unwrap_or(0);
    }

    let (pruned, kept): (Vec<Label>, Vec<Label>) = std::mem::take(labels)
        .into_iter()
        .partition(|l| l.frequency == 0 && scope.covers(l.id));
    *labels = kept;

    if !pruned.is_empty() {
        tracing::debug!(
            pruned = pruned.len(),
            remaining = labels.len(),
            "pruned labels no entry carries"
        );
    }

    pruned
}

//! Single-label connection lookup straight from entry data

use super::types::Connection;
use crate::graph::{Entry, EntryId, Label, LabelId};
use std::collections::HashMap;

/// All labels co-occurring with `label`, strongest first.
///
/// Scans the entries carrying `label` and credits each entry to every other
/// label on it. Neighbor names come from `labels`; neighbors missing there
/// are skipped. Ties keep discovery order. No truncation.
pub fn connections_for(label: LabelId, labels: &[Label], entries: &[Entry]) -> Vec<Connection> {
    let names: HashMap<LabelId, &str> = labels
        .iter()
        .rev()
        .map(|l| (l.id, l.name.as_str()))
        .collect();

    let mut order: Vec<LabelId> = Vec::new();
    let mut shared: HashMap<LabelId, Vec<EntryId>> = HashMap::new();

    for entry in entries.iter().filter(|e| e.has_label(label)) {
        for &other in entry.labels().iter().filter(|&&other| other != label) {
            shared
                .entry(other)
                .or_insert_with(|| {
                    order.push(other);
                    Vec::new()
                })
                .push(entry.id);
        }
    }

    let mut connections: Vec<Connection> = order
        .into_iter()
        .filter_map(|other| {
            let name = names.get(&other)?;
            let entry_ids = shared.remove(&other)?;
            Some(Connection::from_shared(other, *name, entry_ids))
        })
        .collect();

    connections.sort_by(|a, b| b.strength().cmp(&a.strength()));
    connections
}

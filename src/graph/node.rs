//! Node representation in the co-occurrence graph

use super::ids::{EntryId, LabelId};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Adjacency of one node: neighbor label id to the entries the two
/// labels share, in insertion order.
///
/// Lists are append-only; an entry id is pushed once per co-occurrence.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: Vec<(LabelId, Vec<EntryId>)>,
    index: HashMap<LabelId, usize>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the edge toward `neighbor`, creating the edge
    /// on first sight.
    pub fn push(&mut self, neighbor: LabelId, entry: EntryId) {
        match self.index.get(&neighbor) {
            Some(&idx) => self.neighbors[idx].1.push(entry),
            None => {
                self.index.insert(neighbor, self.neighbors.len());
                self.neighbors.push((neighbor, vec![entry]));
            }
        }
    }

    /// Shared entries toward a neighbor, if the two labels co-occur
    pub fn get(&self, neighbor: LabelId) -> Option<&[EntryId]> {
        self.index
            .get(&neighbor)
            .map(|&idx| self.neighbors[idx].1.as_slice())
    }

    pub fn contains(&self, neighbor: LabelId) -> bool {
        self.index.contains_key(&neighbor)
    }

    /// Iterate edges in neighbor discovery order
    pub fn iter(&self) -> impl Iterator<Item = (LabelId, &[EntryId])> {
        self.neighbors.iter().map(|(id, entries)| (*id, entries.as_slice()))
    }

    /// Number of distinct neighbors
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

impl PartialEq for Adjacency {
    fn eq(&self, other: &Self) -> bool {
        self.neighbors == other.neighbors
    }
}

impl Eq for Adjacency {}

/// Serializes as a map keyed by neighbor id, in discovery order.
impl Serialize for Adjacency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.neighbors.len()))?;
        for (neighbor, entries) in &self.neighbors {
            map.serialize_entry(neighbor, entries)?;
        }
        map.end()
    }
}

/// A node in the co-occurrence graph, one per label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Label this node stands for
    #[serde(rename = "id")]
    pub label_id: LabelId,
    /// Label name at build time
    #[serde(rename = "name")]
    pub label_name: String,
    /// Label frequency at build time
    pub frequency: u32,
    /// Co-occurrence edges
    pub edges: Adjacency,
    /// Entries carrying this label, in processing order
    #[serde(skip)]
    pub entry_ids: Vec<EntryId>,
}

impl GraphNode {
    pub fn new(label_id: LabelId, label_name: impl Into<String>, frequency: u32) -> Self {
        Self {
            label_id,
            label_name: label_name.into(),
            frequency,
            edges: Adjacency::new(),
            entry_ids: Vec::new(),
        }
    }

    /// Record that `entry` links this label to `other`
    pub fn add_edge(&mut self, other: LabelId, entry: EntryId) {
        self.edges.push(other, entry);
    }

    /// Number of entries shared with another label (0 if none)
    pub fn connection_strength(&self, other: LabelId) -> usize {
        self.edges.get(other).map_or(0, |entries| entries.len())
    }

    /// True when the label co-occurs with nothing
    pub fn is_isolated(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_keeps_discovery_order() {
        let mut adj = Adjacency::new();
        adj.push(LabelId::new(9), EntryId::new(1));
        adj.push(LabelId::new(2), EntryId::new(1));
        adj.push(LabelId::new(9), EntryId::new(3));

        let order: Vec<_> = adj.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(order, vec![9, 2]);
        assert_eq!(adj.get(LabelId::new(9)), Some(&[EntryId::new(1), EntryId::new(3)][..]));
        assert_eq!(adj.len(), 2);
    }

    #[test]
    fn connection_strength_counts_shared_entries() {
        let mut node = GraphNode::new(LabelId::new(1), "flying", 2);
        node.add_edge(LabelId::new(2), EntryId::new(10));
        node.add_edge(LabelId::new(2), EntryId::new(11));

        assert_eq!(node.connection_strength(LabelId::new(2)), 2);
        assert_eq!(node.connection_strength(LabelId::new(3)), 0);
        assert!(!node.is_isolated());
    }

    #[test]
    fn adjacency_serializes_as_string_keyed_map() {
        let mut node = GraphNode::new(LabelId::new(1), "flying", 1);
        node.add_edge(LabelId::new(5), EntryId::new(10));
        node.add_edge(LabelId::new(3), EntryId::new(10));

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"flying","frequency":1,"edges":{"5":[10],"3":[10]}}"#
        );
    }
}

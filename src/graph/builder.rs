//! Graph: one owner's label co-occurrence multigraph

use super::ids::LabelId;
use super::label::{Entry, Label};
use super::node::GraphNode;
use serde::Serialize;
use std::collections::HashMap;

/// Label co-occurrence graph
///
/// Nodes live in an arena in the order their labels were supplied;
/// `index` maps label ids into it. Built once per request and read-only
/// afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    #[serde(skip)]
    index: HashMap<LabelId, usize>,
}

impl Graph {
    /// Build the graph for one owner.
    ///
    /// Every label gets a node, seeded with its current frequency, even when
    /// no entry carries it. Each entry with two or more known labels credits
    /// its id to both sides of every label pair it contains. Label ids not
    /// present in `labels` are skipped.
    pub fn build(labels: &[Label], entries: &[Entry]) -> Self {
        let mut graph = Self::default();

        for label in labels {
            graph.add_node(label);
        }

        for entry in entries {
            let known: Vec<usize> = entry
                .labels()
                .iter()
                .filter_map(|id| graph.index.get(id).copied())
                .collect();

            for &idx in &known {
                graph.nodes[idx].entry_ids.push(entry.id);
            }

            if known.len() < 2 {
                continue;
            }

            for (i, &a) in known.iter().enumerate() {
                for &b in &known[i + 1..] {
                    let (id_a, id_b) = (graph.nodes[a].label_id, graph.nodes[b].label_id);
                    graph.nodes[a].add_edge(id_b, entry.id);
                    graph.nodes[b].add_edge(id_a, entry.id);
                }
            }
        }

        tracing::debug!(
            nodes = graph.len(),
            entries = entries.len(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );

        graph
    }

    /// Add a node unless one already exists for the label
    fn add_node(&mut self, label: &Label) {
        if self.index.contains_key(&label.id) {
            return;
        }
        self.index.insert(label.id, self.nodes.len());
        self.nodes
            .push(GraphNode::new(label.id, label.name.clone(), label.frequency));
    }

    /// Get a node by label id
    pub fn node(&self, id: LabelId) -> Option<&GraphNode> {
        self.index.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// All nodes, in label input order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn contains(&self, id: LabelId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of co-occurring label pairs (each undirected pair once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Graph {}

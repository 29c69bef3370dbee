//! Ranked per-label statistics derived from a built graph

use super::types::{Connection, Statistic};
use crate::graph::{Graph, GraphNode};

/// Number of neighbors kept in [`Statistic::top_connections`]
pub const TOP_CONNECTIONS: usize = 5;

/// Derives one [`Statistic`] per graph node.
///
/// Connections are ranked by strength, descending. Sorting is stable, so
/// equal strengths keep neighbor discovery order. Statistics are ranked by
/// frequency, descending; equal frequencies keep graph node order (the
/// order labels were given to [`Graph::build`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsDeriver {
    include_entry_ids: bool,
}

impl StatisticsDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill [`Statistic::all_entry_ids`] from the entries each label was seen on
    pub fn with_entry_ids(mut self, include: bool) -> Self {
        self.include_entry_ids = include;
        self
    }

    /// Derive statistics for every node in the graph
    pub fn derive(&self, graph: &Graph) -> Vec<Statistic> {
        let mut stats: Vec<Statistic> = graph
            .nodes()
            .map(|node| self.node_statistic(graph, node))
            .collect();

        stats.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        stats
    }

    fn node_statistic(&self, graph: &Graph, node: &GraphNode) -> Statistic {
        let mut connections = ranked_connections(graph, node);
        connections.truncate(TOP_CONNECTIONS);

        Statistic {
            id: node.label_id,
            name: node.label_name.clone(),
            frequency: node.frequency,
            total_connections: node.edges.len(),
            top_connections: connections,
            all_entry_ids: self.include_entry_ids.then(|| node.entry_ids.clone()),
        }
    }
}

/// Derive statistics with the default options
pub fn derive_statistics(graph: &Graph) -> Vec<Statistic> {
    StatisticsDeriver::new().derive(graph)
}

/// All connections of a node, strongest first.
///
/// Neighbors missing from the graph are skipped.
pub fn ranked_connections(graph: &Graph, node: &GraphNode) -> Vec<Connection> {
    let mut connections: Vec<Connection> = node
        .edges
        .iter()
        .filter_map(|(neighbor_id, shared)| {
            let neighbor = graph.node(neighbor_id)?;
            Some(Connection::from_shared(
                neighbor_id,
                neighbor.label_name.clone(),
                shared.to_vec(),
            ))
        })
        .collect();

    connections.sort_by(|a, b| b.strength().cmp(&a.strength()));
    connections
}

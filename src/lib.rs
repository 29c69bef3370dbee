//! cooccur: Label Co-occurrence Graph Engine
//!
//! Builds an undirected multigraph of label co-occurrence from one owner's
//! journal entries and derives ranked connection statistics from it.
//!
//! # Core Concepts
//!
//! - **Labels**: short descriptors with a frequency (entries carrying them)
//! - **Entries**: journal records carrying a set of labels
//! - **Graph**: one node per label; an edge lists every entry two labels share
//! - **Statistics**: per-label neighbor counts and top connections
//!
//! # Example
//!
//! ```
//! use cooccur::{derive_statistics, Entry, Graph, Label, LabelId};
//!
//! let labels = vec![Label::new(1, "flying", 1), Label::new(2, "water", 1)];
//! let entries = vec![Entry::new(10, [LabelId::new(1), LabelId::new(2)])];
//!
//! let graph = Graph::build(&labels, &entries);
//! let stats = derive_statistics(&graph);
//! assert_eq!(stats[0].total_connections, 1);
//! ```

pub mod config;
pub mod feed;
mod graph;
pub mod journal;
pub mod query;

pub use config::{ConfigError, ConfigResult, JournalConfig};
pub use feed::{Feed, FeedError, FeedResult};
pub use graph::{
    normalize_label_name, Adjacency, Entry, EntryId, Graph, GraphNode, Label, LabelId, OwnerId,
};
pub use journal::{
    recompute_and_prune, CooccurrenceEngine, Journal, JournalEntry, JournalError, JournalResult,
    PruneScope,
};
pub use query::{
    connections_for, derive_statistics, ranked_connections, Connection, Statistic,
    StatisticsDeriver, TOP_CONNECTIONS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

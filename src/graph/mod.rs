//! Core graph data structures

mod builder;
mod ids;
mod label;
mod node;


pub use builder::Graph;
pub use ids::{EntryId, LabelId, OwnerId};
pub use label::{normalize_label_name, Entry, Label};
pub use node::{Adjacency, GraphNode};

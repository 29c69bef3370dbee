//! Queries over co-occurrence data
//!
//! Derives ranked statistics from a built [`crate::Graph`], and looks up a
//! single label's connections directly from entries.

mod connections;
mod statistics;
mod types;

pub use connections::connections_for;
pub use statistics::{derive_statistics, ranked_connections, StatisticsDeriver, TOP_CONNECTIONS};
pub use types::{Connection, Statistic};

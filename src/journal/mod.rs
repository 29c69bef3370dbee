//! Owner-scoped label and entry bookkeeping
//!
//! Keeps labels and entries per owner, recounts label frequencies after
//! every attachment change, and feeds snapshots to the co-occurrence core.

mod book;
mod bookkeeping;
mod engine;
mod error;

pub use book::{Journal, JournalEntry};
pub use bookkeeping::{recompute_and_prune, PruneScope};
pub use engine::CooccurrenceEngine;
pub use error::{JournalError, JournalResult};

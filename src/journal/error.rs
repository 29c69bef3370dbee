//! Errors for journal operations

use crate::graph::{EntryId, LabelId, OwnerId};
use thiserror::Error;

/// Errors that can occur in journal operations
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Journal not found for owner: {0}")]
    JournalNotFound(OwnerId),

    #[error("Label not found: {0}")]
    LabelNotFound(LabelId),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Invalid label name '{name}': {reason}")]
    InvalidLabelName { name: String, reason: String },
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

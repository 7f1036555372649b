//! Per-row data handed to the presentation layer.

use dyntable_model::RowId;

/// A row as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    pub label1: Option<String>,
    pub label2: Vec<String>,
    /// Column-1 values the single-select control may offer for this row.
    pub available_label1: Vec<String>,
}

/// Transient message tied to the pending-option input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
}

impl Feedback {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

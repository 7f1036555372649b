//! Edit error types.
//!
//! Option errors are recovered by the edit controller and shown next to the
//! pending-option input. Edit errors are returned from row updates when the
//! controller runs with [`Label1Policy::Reject`](crate::Label1Policy::Reject).

use dyntable_model::RowId;
use thiserror::Error;

/// Rejection of a proposed column-2 option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The proposed value is blank after trimming.
    #[error("option value is empty")]
    EmptyValue,

    /// The proposed value already exists (exact match).
    #[error("option '{0}' already exists")]
    DuplicateValue(String),
}

impl OptionError {
    /// Short message suitable for display beside the input field.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyValue => "Item cannot be empty!".to_string(),
            Self::DuplicateValue(_) => "Item already exists!".to_string(),
        }
    }
}

/// Rejection of a row update that would break a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Another row already holds the single-select value.
    #[error("'{value}' is already assigned to row {holder}")]
    Label1Taken { value: String, holder: RowId },

    /// The single-select value is not in the column-1 vocabulary.
    #[error("'{0}' is not a column 1 option")]
    UnknownLabel1(String),

    /// One or more multi-select values are not in the column-2 vocabulary.
    #[error("not column 2 options: {}", .0.join(", "))]
    UnknownLabel2(Vec<String>),
}

pub type Result<T> = std::result::Result<T, EditError>;

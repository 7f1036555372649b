//! The persisted application state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ModelError, OptionSet, Result, Row, RowId};

/// Vocabulary used for both columns when nothing else is configured.
pub const DEFAULT_OPTIONS: &[&str] = &["Option 1", "Option 2", "Option 3", "Option 4"];

/// Rows plus both option vocabularies.
///
/// Serialized as
/// `{"rows": [...], "column1Options": [...], "column2Options": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub rows: Vec<Row>,
    pub column1_options: OptionSet,
    pub column2_options: OptionSet,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_options(
            DEFAULT_OPTIONS.iter().copied().collect(),
            DEFAULT_OPTIONS.iter().copied().collect(),
        )
    }
}

impl TableState {
    /// Fresh state holding a single blank row with id 1.
    pub fn with_options(column1_options: OptionSet, column2_options: OptionSet) -> Self {
        Self {
            rows: vec![Row::blank(RowId::new(1))],
            column1_options,
            column2_options,
        }
    }

    /// Check the structural invariants a loaded snapshot must satisfy:
    /// distinct row ids and well-formed vocabularies for both columns.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.rows.len());
        for row in &self.rows {
            if !ids.insert(row.id) {
                return Err(ModelError::DuplicateRowId(row.id));
            }
        }
        self.column1_options.validate()?;
        self.column2_options.validate()
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Largest row id in use, if any.
    pub fn max_row_id(&self) -> Option<RowId> {
        self.rows.iter().map(|row| row.id).max()
    }
}

//! Option vocabularies for both columns.

use dyntable_model::{OptionSet, Row};

use crate::constraint;
use crate::error::OptionError;

/// Holds the fixed column-1 vocabulary and the append-only column-2
/// vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    column1: OptionSet,
    column2: OptionSet,
}

impl OptionRegistry {
    pub fn new(column1: OptionSet, column2: OptionSet) -> Self {
        Self { column1, column2 }
    }

    pub fn column1(&self) -> &OptionSet {
        &self.column1
    }

    pub fn column2(&self) -> &OptionSet {
        &self.column2
    }

    pub fn column1_values(&self) -> &[String] {
        self.column1.as_slice()
    }

    pub fn column2_values(&self) -> &[String] {
        self.column2.as_slice()
    }

    pub fn contains_column1(&self, value: &str) -> bool {
        self.column1.contains(value)
    }

    pub fn contains_column2(&self, value: &str) -> bool {
        self.column2.contains(value)
    }

    /// Column-1 values assignable to `for_row` given the other rows.
    pub fn available_column1_values<'a>(&'a self, rows: &[Row], for_row: &Row) -> Vec<&'a str> {
        constraint::available_column1_values(rows, &self.column1, for_row)
    }

    /// Validate and append a new column-2 option.
    ///
    /// The candidate is trimmed first. On success the stored value is
    /// returned and sits at the end of the vocabulary.
    pub fn add_column2_option(&mut self, candidate: &str) -> Result<String, OptionError> {
        let value = candidate.trim();
        if value.is_empty() {
            return Err(OptionError::EmptyValue);
        }
        if self.column2.contains(value) {
            return Err(OptionError::DuplicateValue(value.to_string()));
        }
        self.column2.push(value.to_string());
        tracing::debug!(option = value, total = self.column2.len(), "added column 2 option");
        Ok(value.to_string())
    }

    pub fn into_parts(self) -> (OptionSet, OptionSet) {
        (self.column1, self.column2)
    }
}

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::RowId;

/// One record in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Single-select value, `None` when unset.
    pub label1: Option<String>,
    /// Multi-select values in selection order, without duplicates.
    #[serde(default)]
    pub label2: Vec<String>,
}

impl Row {
    /// A row with unset `label1` and empty `label2`.
    pub fn blank(id: RowId) -> Self {
        Self {
            id,
            label1: None,
            label2: Vec::new(),
        }
    }

    /// Apply a partial update. `label2` is replaced, not merged.
    pub fn apply(&mut self, update: RowUpdate) {
        if let Some(label1) = update.label1 {
            self.label1 = label1;
        }
        if let Some(label2) = update.label2 {
            self.label2 = dedup_preserving_order(label2);
        }
    }

    pub fn has_label2(&self, value: &str) -> bool {
        self.label2.iter().any(|v| v == value)
    }
}

/// Field-level partial update for a [`Row`].
///
/// `label1: Some(None)` clears the single-select value; `None` leaves it
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowUpdate {
    pub label1: Option<Option<String>>,
    pub label2: Option<Vec<String>>,
}

impl RowUpdate {
    pub fn label1(value: impl Into<String>) -> Self {
        Self {
            label1: Some(Some(value.into())),
            label2: None,
        }
    }

    pub fn clear_label1() -> Self {
        Self {
            label1: Some(None),
            label2: None,
        }
    }

    pub fn label2<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label1: None,
            label2: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    #[must_use]
    pub fn with_label1(mut self, value: Option<String>) -> Self {
        self.label1 = Some(value);
        self
    }

    #[must_use]
    pub fn with_label2(mut self, values: Vec<String>) -> Self {
        self.label2 = Some(values);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label1.is_none() && self.label2.is_none()
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

//! The single mutation surface for table state.
//!
//! [`EditController`] owns the row store and option registry. Every user
//! intent is one method call here; each successful mutation ends by handing a
//! full [`TableState`] snapshot to the configured [`SnapshotSink`].

use std::convert::Infallible;

use dyntable_model::{Row, RowId, RowUpdate, TableState};

use crate::constraint::{self, Label1Policy};
use crate::error::{EditError, OptionError};
use crate::registry::OptionRegistry;
use crate::store::RowStore;
use crate::view::{Feedback, RowView};

/// Receives a complete snapshot after every mutation.
pub trait SnapshotSink {
    type Error: std::error::Error;

    fn persist(&mut self, state: &TableState) -> Result<(), Self::Error>;
}

/// Keeps every snapshot in memory.
impl SnapshotSink for Vec<TableState> {
    type Error = Infallible;

    fn persist(&mut self, state: &TableState) -> Result<(), Self::Error> {
        self.push(state.clone());
        Ok(())
    }
}

pub struct EditController<S: SnapshotSink> {
    store: RowStore,
    registry: OptionRegistry,
    policy: Label1Policy,
    sink: S,
    pending_option: String,
    feedback: Option<Feedback>,
    last_save_error: Option<String>,
}

impl<S: SnapshotSink> EditController<S> {
    /// Start a session from a loaded (or default) state.
    pub fn new(state: TableState, sink: S) -> Self {
        let TableState {
            rows,
            column1_options,
            column2_options,
        } = state;
        Self {
            store: RowStore::from_rows(rows),
            registry: OptionRegistry::new(column1_options, column2_options),
            policy: Label1Policy::default(),
            sink,
            pending_option: String::new(),
            feedback: None,
            last_save_error: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: Label1Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep newly added rows at or above `floor`. See
    /// [`RowStore::raise_id_floor`].
    #[must_use]
    pub fn with_id_floor(mut self, floor: RowId) -> Self {
        self.store.raise_id_floor(floor);
        self
    }

    pub fn policy(&self) -> Label1Policy {
        self.policy
    }

    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Snapshot of the full application state.
    pub fn state(&self) -> TableState {
        TableState {
            rows: self.store.rows().to_vec(),
            column1_options: self.registry.column1().clone(),
            column2_options: self.registry.column2().clone(),
        }
    }

    /// Column-1 values assignable to the row, or `None` for an unknown id.
    pub fn available_column1_values(&self, id: RowId) -> Option<Vec<&str>> {
        let row = self.store.get(id)?;
        Some(self.registry.available_column1_values(self.store.rows(), row))
    }

    pub fn row_views(&self) -> Vec<RowView> {
        let rows = self.store.rows();
        rows.iter()
            .map(|row| RowView {
                id: row.id,
                label1: row.label1.clone(),
                label2: row.label2.clone(),
                available_label1: self
                    .registry
                    .available_column1_values(rows, row)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    pub fn add_row(&mut self) -> RowId {
        let id = self.store.add_row().id;
        self.persist();
        id
    }

    /// Remove a row. Deleting an unknown id is not an error.
    pub fn delete_row(&mut self, id: RowId) -> bool {
        let removed = self.store.delete_row(id);
        self.persist();
        removed
    }

    pub fn delete_all_rows(&mut self) -> usize {
        let removed = self.store.delete_all_rows();
        self.persist();
        removed
    }

    pub fn set_label1(&mut self, id: RowId, value: Option<String>) -> Result<bool, EditError> {
        self.update_row(
            id,
            RowUpdate {
                label1: Some(value),
                label2: None,
            },
        )
    }

    pub fn set_label2(&mut self, id: RowId, values: Vec<String>) -> Result<bool, EditError> {
        self.update_row(
            id,
            RowUpdate {
                label1: None,
                label2: Some(values),
            },
        )
    }

    /// Apply a partial update to a row.
    ///
    /// Returns `Ok(false)` for an unknown id. Under [`Label1Policy::Reject`]
    /// an update that would share a column-1 value or use a value outside the
    /// vocabularies is refused and nothing is persisted.
    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> Result<bool, EditError> {
        if !self.store.contains(id) {
            tracing::debug!(row = %id, "update for unknown row ignored");
            self.persist();
            return Ok(false);
        }

        if let Err(error) = constraint::check_update(
            self.store.rows(),
            self.registry.column1(),
            self.registry.column2(),
            id,
            &update,
        ) {
            match self.policy {
                Label1Policy::Reject => {
                    tracing::debug!(row = %id, %error, "update rejected");
                    return Err(error);
                }
                Label1Policy::Permit => {
                    tracing::warn!(row = %id, %error, "applying update that breaks a table constraint");
                }
            }
        }

        self.store.update_row(id, update);
        self.persist();
        Ok(true)
    }

    pub fn pending_option(&self) -> &str {
        &self.pending_option
    }

    pub fn set_pending_option(&mut self, text: impl Into<String>) {
        self.pending_option = text.into();
    }

    /// Try to add the pending input as a column-2 option.
    ///
    /// Failures become [`Feedback`]; success clears both the input and any
    /// earlier feedback.
    pub fn submit_pending_option(&mut self) -> Result<String, OptionError> {
        let candidate = std::mem::take(&mut self.pending_option);
        match self.add_column2_option(&candidate) {
            Ok(value) => Ok(value),
            Err(error) => {
                self.pending_option = candidate;
                Err(error)
            }
        }
    }

    /// Add a column-2 option directly, bypassing the pending input.
    pub fn add_column2_option(&mut self, candidate: &str) -> Result<String, OptionError> {
        match self.registry.add_column2_option(candidate) {
            Ok(value) => {
                self.feedback = None;
                self.persist();
                Ok(value)
            }
            Err(error) => {
                tracing::debug!(%error, "column 2 option rejected");
                self.feedback = Some(Feedback::new(error.user_message()));
                Err(error)
            }
        }
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback = None;
    }

    /// Message from the most recent failed snapshot write, cleared by the
    /// next successful one.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    pub fn into_state(self) -> TableState {
        let (column1_options, column2_options) = self.registry.into_parts();
        TableState {
            rows: self.store.into_rows(),
            column1_options,
            column2_options,
        }
    }

    fn persist(&mut self) {
        let snapshot = self.state();
        match self.sink.persist(&snapshot) {
            Ok(()) => self.last_save_error = None,
            Err(error) => {
                tracing::warn!(%error, "failed to persist table state");
                self.last_save_error = Some(error.to_string());
            }
        }
    }
}

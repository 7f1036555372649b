//! Constraint evaluation over rows and option sets.
//!
//! Everything here is a pure function of the current rows and vocabularies.
//! Nothing is cached; the table is expected to hold tens of rows, so the
//! `O(rows * options)` filter is recomputed on every query.

use std::collections::BTreeMap;

use dyntable_model::{OptionSet, Row, RowId, RowUpdate};

use crate::error::{EditError, Result};

/// Column-1 values that may be offered to `for_row`.
///
/// A value is offered when it is the row's own current selection or when no
/// other row holds it. Option order is preserved.
pub fn available_column1_values<'a>(
    rows: &[Row],
    column1_options: &'a OptionSet,
    for_row: &Row,
) -> Vec<&'a str> {
    column1_options
        .iter()
        .filter(|option| {
            for_row.label1.as_deref() == Some(*option)
                || label1_holder(rows, option, for_row.id).is_none()
        })
        .collect()
}

/// The id of a row other than `excluding` whose `label1` equals `value`.
pub fn label1_holder(rows: &[Row], value: &str, excluding: RowId) -> Option<RowId> {
    rows.iter()
        .find(|row| row.id != excluding && row.label1.as_deref() == Some(value))
        .map(|row| row.id)
}

/// Column-1 values currently held by more than one row, with their holders.
pub fn label1_conflicts(rows: &[Row]) -> BTreeMap<String, Vec<RowId>> {
    let mut holders: BTreeMap<String, Vec<RowId>> = BTreeMap::new();
    for row in rows {
        if let Some(value) = &row.label1 {
            holders.entry(value.clone()).or_default().push(row.id);
        }
    }
    holders.retain(|_, ids| ids.len() > 1);
    holders
}

/// Values in the row's `label2` that are not column-2 options.
pub fn unknown_label2_values<'a>(row: &'a Row, column2_options: &OptionSet) -> Vec<&'a str> {
    row.label2
        .iter()
        .map(String::as_str)
        .filter(|value| !column2_options.contains(value))
        .collect()
}

/// Check an update against the uniqueness and vocabulary constraints.
///
/// The target row must exist; callers treat updates to unknown ids as
/// no-ops before reaching this check.
pub fn check_update(
    rows: &[Row],
    column1_options: &OptionSet,
    column2_options: &OptionSet,
    id: RowId,
    update: &RowUpdate,
) -> Result<()> {
    if let Some(Some(value)) = &update.label1 {
        if !column1_options.contains(value) {
            return Err(EditError::UnknownLabel1(value.clone()));
        }
        if let Some(holder) = label1_holder(rows, value, id) {
            return Err(EditError::Label1Taken {
                value: value.clone(),
                holder,
            });
        }
    }
    if let Some(values) = &update.label2 {
        let unknown: Vec<String> = values
            .iter()
            .filter(|value| !column2_options.contains(value))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(EditError::UnknownLabel2(unknown));
        }
    }
    Ok(())
}

/// What the edit controller does with an update that breaks a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label1Policy {
    /// Refuse the update and leave the row unchanged.
    #[default]
    Reject,
    /// Apply the update and log a warning. Conflicts stay visible through
    /// [`label1_conflicts`] until a later edit resolves them.
    Permit,
}

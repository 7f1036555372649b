//! One function per user intent. Each returns the text to print.

use anyhow::{Result, anyhow, bail};
use dyntable_core::{label1_conflicts, unknown_label2_values};
use dyntable_model::RowId;
use dyntable_persistence::DurableSlot;

use crate::render::{options_table, rows_table};
use crate::session::Session;

pub fn run_show<S: DurableSlot>(session: &Session<S>) -> String {
    let mut out = rows_table(&session.row_views()).to_string();

    for (value, holders) in label1_conflicts(session.rows()) {
        let ids: Vec<String> = holders.iter().map(ToString::to_string).collect();
        out.push_str(&format!(
            "\nwarning: '{value}' is assigned to rows {}",
            ids.join(", ")
        ));
    }
    let column2 = session.registry().column2();
    for row in session.rows() {
        let unknown = unknown_label2_values(row, column2);
        if !unknown.is_empty() {
            out.push_str(&format!(
                "\nwarning: row {} uses unknown label 2 values: {}",
                row.id,
                unknown.join(", ")
            ));
        }
    }
    out
}

pub fn run_vocabulary<S: DurableSlot>(session: &Session<S>) -> String {
    let registry = session.registry();
    format!(
        "{}\n{}",
        options_table("Label 1 options", registry.column1_values()),
        options_table("Label 2 options", registry.column2_values())
    )
}

pub fn run_add_row<S: DurableSlot>(session: &mut Session<S>) -> String {
    let id = session.add_row();
    format!("Added row {id}")
}

pub fn run_delete_row<S: DurableSlot>(session: &mut Session<S>, id: RowId) -> String {
    if session.delete_row(id) {
        format!("Deleted row {id}")
    } else {
        format!("Row {id} does not exist")
    }
}

pub fn run_delete_all<S: DurableSlot>(session: &mut Session<S>) -> String {
    let removed = session.delete_all_rows();
    format!("Deleted {removed} rows")
}

pub fn run_set_label1<S: DurableSlot>(
    session: &mut Session<S>,
    id: RowId,
    value: Option<String>,
) -> Result<String> {
    let shown = value.clone().unwrap_or_else(|| "-".to_string());
    if !session.set_label1(id, value)? {
        bail!("row {id} does not exist");
    }
    Ok(format!("Row {id}: label 1 = {shown}"))
}

pub fn run_set_label2<S: DurableSlot>(
    session: &mut Session<S>,
    id: RowId,
    values: Vec<String>,
) -> Result<String> {
    let shown = if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    };
    if !session.set_label2(id, values)? {
        bail!("row {id} does not exist");
    }
    Ok(format!("Row {id}: label 2 = {shown}"))
}

pub fn run_add_option<S: DurableSlot>(session: &mut Session<S>, text: &str) -> Result<String> {
    session.set_pending_option(text);
    match session.submit_pending_option() {
        Ok(value) => Ok(format!("Added label 2 option '{value}'")),
        Err(error) => {
            let message = session
                .feedback()
                .map(|feedback| feedback.message.clone())
                .unwrap_or_else(|| error.user_message());
            session.dismiss_feedback();
            Err(anyhow!(message))
        }
    }
}

pub fn run_options<S: DurableSlot>(session: &Session<S>, id: RowId) -> Result<String> {
    let values = session
        .available_column1_values(id)
        .ok_or_else(|| anyhow!("row {id} does not exist"))?;
    if values.is_empty() {
        return Ok(format!("No label 1 values are available for row {id}"));
    }
    Ok(values.join("\n"))
}

/// Warning text when the last snapshot could not be written.
pub fn save_warning<S: DurableSlot>(session: &Session<S>) -> Option<String> {
    session
        .last_save_error()
        .map(|error| format!("warning: changes were not saved: {error}"))
}

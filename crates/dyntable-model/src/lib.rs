//! Data model for the dynamic table editor.
//!
//! A table is an ordered list of [`Row`]s. Each row carries a single-select
//! value (`label1`) drawn from a fixed vocabulary and a multi-select value set
//! (`label2`) drawn from an append-only vocabulary. [`TableState`] bundles the
//! rows with both vocabularies and is the unit of persistence.

pub mod error;
pub mod ids;
pub mod options;
pub mod row;
pub mod state;

pub use error::{ModelError, Result};
pub use ids::RowId;
pub use options::OptionSet;
pub use row::{Row, RowUpdate};
pub use state::{DEFAULT_OPTIONS, TableState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_one_blank_row() {
        let state = TableState::default();
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].label1, None);
        assert!(state.rows[0].label2.is_empty());
        assert_eq!(state.column1_options.as_slice(), DEFAULT_OPTIONS);
        assert_eq!(state.column2_options.as_slice(), DEFAULT_OPTIONS);
    }

    #[test]
    fn state_serializes_with_camel_case_keys() {
        let state = TableState::default();
        let json = serde_json::to_value(&state).expect("serialize state");
        assert!(json.get("column1Options").is_some());
        assert!(json.get("column2Options").is_some());
        assert_eq!(json["rows"][0]["label1"], serde_json::Value::Null);
    }
}

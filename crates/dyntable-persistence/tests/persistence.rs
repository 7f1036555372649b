//! Integration tests for snapshot persistence.

use dyntable_core::EditController;
use dyntable_model::{OptionSet, RowId, TableState};
use dyntable_persistence::{
    FileSlot, LoadSource, MemorySlot, PersistenceError, STORAGE_KEY, SlotSink, load_or_default,
    save, try_load,
};
use proptest::prelude::*;
use tempfile::tempdir;

fn sample_state() -> TableState {
    TableState::with_options(
        OptionSet::try_from_values(["A", "B"]).expect("column 1"),
        OptionSet::try_from_values(["X", "Y"]).expect("column 2"),
    )
}

#[test]
fn edits_are_visible_to_the_next_session() {
    let dir = tempdir().expect("tempdir");

    let outcome = load_or_default(&FileSlot::new(dir.path()));
    assert!(matches!(outcome.source, LoadSource::Missing));
    let mut editor = EditController::new(outcome.into_state(), SlotSink::new(FileSlot::new(dir.path())));
    let second = editor.add_row();
    editor
        .set_label1(RowId::new(1), Some("Option 2".into()))
        .expect("set label1");
    editor.add_column2_option("Option 5").expect("add option");
    editor
        .set_label2(second, vec!["Option 5".into()])
        .expect("set label2");
    let expected = editor.state();
    assert!(editor.last_save_error().is_none());
    drop(editor);

    let reloaded = load_or_default(&FileSlot::new(dir.path()));
    assert!(matches!(reloaded.source, LoadSource::Stored));
    assert_eq!(reloaded.state, expected);
}

#[test]
fn stored_snapshot_has_documented_shape() {
    let mut editor = EditController::new(sample_state(), SlotSink::new(MemorySlot::new()));
    editor.add_column2_option("Z").expect("add Z");
    editor
        .set_label2(RowId::new(1), vec!["X".into(), "Z".into()])
        .expect("set label2");
    editor
        .set_label1(RowId::new(1), Some("A".into()))
        .expect("set label1");

    let stored = try_load(editor.sink().slot(), STORAGE_KEY)
        .expect("load")
        .expect("stored state");
    insta::assert_json_snapshot!(stored, @r###"
    {
      "rows": [
        {
          "id": 1,
          "label1": "A",
          "label2": [
            "X",
            "Z"
          ]
        }
      ],
      "column1Options": [
        "A",
        "B"
      ],
      "column2Options": [
        "X",
        "Y",
        "Z"
      ]
    }
    "###);
}

#[test]
fn corrupt_snapshot_degrades_to_defaults() {
    let slot = MemorySlot::with_value(STORAGE_KEY, r#"{"rows": "nope"}"#);
    let outcome = load_or_default(&slot);

    let error = outcome.recovered_error().expect("recovered error");
    assert!(matches!(error, PersistenceError::MalformedPersistedState { .. }));
    assert!(error.suggestion().is_none());
    assert_eq!(outcome.state, TableState::default());
}

#[test]
fn loaded_ids_are_never_reissued() {
    let slot = MemorySlot::with_value(
        STORAGE_KEY,
        r#"{"rows":[{"id":1718000000000,"label1":"A","label2":[]}],"column1Options":["A","B"],"column2Options":[]}"#,
    );
    let state = load_or_default(&slot).into_state();
    let mut editor = EditController::new(state, SlotSink::new(slot));
    let id = editor.add_row();
    assert_eq!(id, RowId::new(1_718_000_000_001));
    assert_eq!(editor.available_column1_values(id), Some(vec!["B"]));
}

#[derive(Debug, Clone)]
enum Edit {
    AddRow,
    Delete(usize),
    Label1(usize, usize),
    Label2(usize, Vec<usize>),
    AddOption(String),
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::AddRow),
        (0usize..6).prop_map(Edit::Delete),
        (0usize..6, 0usize..2).prop_map(|(row, value)| Edit::Label1(row, value)),
        (0usize..6, proptest::collection::vec(0usize..6, 0..4))
            .prop_map(|(row, values)| Edit::Label2(row, values)),
        "[a-z]{1,4}".prop_map(Edit::AddOption),
    ]
}

proptest! {
    #[test]
    fn reachable_states_round_trip(edits in proptest::collection::vec(edit(), 0..25)) {
        let mut slot = MemorySlot::new();
        save(&mut slot, STORAGE_KEY, &sample_state()).unwrap();
        let mut editor = EditController::new(sample_state(), SlotSink::new(slot));
        for edit in edits {
            let rows: Vec<RowId> = editor.rows().iter().map(|row| row.id).collect();
            let pick = |i: usize| rows.get(i % rows.len().max(1)).copied().unwrap_or(RowId::new(0));
            match edit {
                Edit::AddRow => {
                    editor.add_row();
                }
                Edit::Delete(i) => {
                    editor.delete_row(pick(i));
                }
                Edit::Label1(i, v) => {
                    let value = editor.registry().column1_values()[v].clone();
                    let _ = editor.set_label1(pick(i), Some(value));
                }
                Edit::Label2(i, picks) => {
                    let options = editor.registry().column2_values().to_vec();
                    let values = picks.iter().map(|p| options[p % options.len()].clone()).collect();
                    let _ = editor.set_label2(pick(i), values);
                }
                Edit::AddOption(text) => {
                    let _ = editor.add_column2_option(&text);
                }
            }
        }

        let expected = editor.state();
        let stored = try_load(editor.sink().slot(), STORAGE_KEY).unwrap();
        prop_assert_eq!(stored, Some(expected));
    }
}

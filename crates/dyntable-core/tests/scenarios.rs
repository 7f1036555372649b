//! End-to-end editing scenarios through the edit controller.

use dyntable_core::{EditController, EditError, Label1Policy, OptionError, label1_conflicts};
use dyntable_model::{OptionSet, RowId, RowUpdate, TableState};

fn editor() -> EditController<Vec<TableState>> {
    let state = TableState::with_options(
        OptionSet::try_from_values(["A", "B"]).expect("column 1 options"),
        OptionSet::try_from_values(["X", "Y"]).expect("column 2 options"),
    );
    EditController::new(state, Vec::new())
}

#[test]
fn taken_label1_is_not_offered_to_new_row() {
    let mut editor = editor();
    let first = RowId::new(1);
    editor
        .update_row(first, RowUpdate::label1("A"))
        .expect("update row 1");

    let second = editor.add_row();
    assert_eq!(second, RowId::new(2));
    assert_eq!(editor.available_column1_values(second), Some(vec!["B"]));
    assert_eq!(editor.available_column1_values(first), Some(vec!["A", "B"]));
}

#[test]
fn duplicate_option_leaves_set_unchanged() {
    let mut editor = editor();
    assert_eq!(
        editor.add_column2_option("X"),
        Err(OptionError::DuplicateValue("X".to_string()))
    );
    assert_eq!(editor.registry().column2_values(), ["X", "Y"]);
}

#[test]
fn new_option_can_be_selected_in_label2() {
    let mut editor = editor();
    editor.add_column2_option("Z").expect("add Z");
    editor
        .update_row(RowId::new(1), RowUpdate::label2(["X", "Z"]))
        .expect("update label2");

    let state = editor.state();
    assert_eq!(state.rows[0].label2, vec!["X".to_string(), "Z".to_string()]);
    assert_eq!(state.column2_options.as_slice(), ["X", "Y", "Z"]);
}

#[test]
fn delete_all_then_add_yields_fresh_identity() {
    let mut editor = editor();
    editor.add_row();
    editor.add_row();
    assert_eq!(editor.rows().len(), 3);
    let prior: Vec<RowId> = editor.rows().iter().map(|row| row.id).collect();

    assert_eq!(editor.delete_all_rows(), 3);
    assert!(editor.rows().is_empty());

    let fresh = editor.add_row();
    assert_eq!(editor.rows().len(), 1);
    assert!(!prior.contains(&fresh));
}

#[test]
fn deleting_absent_row_twice_is_stable() {
    let mut editor = editor();
    let missing = RowId::new(99);
    assert!(!editor.delete_row(missing));
    let after_first = editor.state();
    assert!(!editor.delete_row(missing));
    assert_eq!(editor.state(), after_first);
}

#[test]
fn label2_outside_vocabulary_is_rejected() {
    let mut editor = editor();
    let result = editor.set_label2(RowId::new(1), vec!["X".into(), "nope".into()]);
    assert_eq!(result, Err(EditError::UnknownLabel2(vec!["nope".to_string()])));
    assert!(editor.rows()[0].label2.is_empty());
}

#[test]
fn permissive_policy_applies_conflicting_update() {
    let mut editor = editor().with_policy(Label1Policy::Permit);
    let first = RowId::new(1);
    let second = editor.add_row();
    editor.set_label1(first, Some("A".into())).expect("row 1");
    assert_eq!(editor.set_label1(second, Some("A".into())), Ok(true));

    let conflicts = label1_conflicts(editor.rows());
    assert_eq!(conflicts.get("A"), Some(&vec![first, second]));

    editor.set_label1(second, None).expect("clear row 2");
    assert!(label1_conflicts(editor.rows()).is_empty());
}

#[test]
fn row_views_carry_filtered_choices() {
    let mut editor = editor();
    let second = editor.add_row();
    editor.set_label1(second, Some("B".into())).expect("row 2");

    let views = editor.row_views();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].available_label1, vec!["A".to_string()]);
    assert_eq!(views[1].label1.as_deref(), Some("B"));
    assert_eq!(views[1].available_label1, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn update_for_unknown_row_changes_nothing() {
    let mut editor = editor();
    let before = editor.state();
    assert_eq!(editor.set_label1(RowId::new(42), Some("A".into())), Ok(false));
    assert_eq!(editor.state(), before);
}

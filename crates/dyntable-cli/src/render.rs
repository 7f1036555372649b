//! Table rendering for terminal output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dyntable_core::RowView;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Render rows as `ID | Label 1 | Label 2 | Assignable`.
pub fn rows_table(rows: &[RowView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Label 1"),
        header_cell("Label 2"),
        header_cell("Assignable"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for row in rows {
        let label1 = match &row.label1 {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        let label2 = if row.label2.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row.label2.join(", "))
        };
        table.add_row(vec![
            Cell::new(row.id),
            label1,
            label2,
            dim_cell(row.available_label1.join(", ")),
        ]);
    }
    table
}

/// Render an option vocabulary with its position.
pub fn options_table(title: &str, values: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    for (index, value) in values.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(value)]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

/// Creates a styled table with a bold header row.
pub fn styled_table(columns: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = columns
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Prints a styled table.
pub fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    println!("{}", styled_table(columns, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_contains_every_cell() {
        let rows = vec![vec!["mixed-pair".to_string(), "BG".to_string()]];
        let rendered = styled_table(&["name", "beans"], &rows).to_string();
        assert!(rendered.contains("mixed-pair"));
        assert!(rendered.contains("BG"));
        assert!(rendered.contains("beans"));
    }
}

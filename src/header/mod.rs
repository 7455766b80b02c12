//! # Header Promotion
//!
//! Turns the selected rows of a table into its column names. The cells of the
//! selected rows are joined per column, the joined labels are made unique, and
//! the header rows (optionally together with every row above them) are removed.
use crate::database::column::Column;
use crate::database::range::RowSelector;
use crate::database::table::Table;
use tracing::debug;

pub mod unique;

pub use unique::make_unique;
pub use unique::UniquifyWarning;

/// Joins the texts of several header cells of one column.
const LABEL_SEPARATOR: &str = " – ";

/// Result of a header promotion.
#[derive(Clone, Debug, PartialEq)]
pub struct Promoted {
    pub table: Table,
    pub warnings: Vec<UniquifyWarning>,
}

/// Builds the header label of a column from the rows selected by `mask`.
/// Missing and empty cells are skipped.
fn header_label(column: &Column, mask: &[bool]) -> String {
    column
        .values
        .iter()
        .zip(mask)
        .filter(|(_, selected)| **selected)
        .filter_map(|(cell, _)| cell.text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

/// Promotes the rows picked by `selector` to column names.
///
/// When no row of the table is selected the table is returned untouched.
/// With `delete_above` every row from the top through the last selected row
/// is removed, not only the selected ones.
pub fn promote(table: Table, selector: &RowSelector, delete_above: bool) -> Promoted {
    let row_count = table.row_count();
    let mut mask: Vec<bool> = (0..row_count).map(|row| selector.contains(row)).collect();
    let header_rows = mask.iter().filter(|selected| **selected).count();
    if header_rows == 0 {
        debug!(rows = row_count, "no header rows selected, table unchanged");
        return Promoted {
            table,
            warnings: Vec::new(),
        };
    }

    let labels: Vec<String> = table
        .columns()
        .iter()
        .map(|column| header_label(column, &mask))
        .collect();
    let (names, warnings) = make_unique(&labels);

    if delete_above {
        if let Some(last) = selector.max_last() {
            let upper = last.min(row_count - 1);
            mask[..=upper].fill(true);
        }
    }
    let removed = mask.iter().filter(|selected| **selected).count();

    let columns = table
        .into_columns()
        .into_iter()
        .zip(names)
        .map(|(mut column, name)| {
            column.name = name;
            column.remove_rows(&mask);
            column.prune_categories();
            column
        })
        .collect();

    debug!(
        header_rows,
        removed,
        remaining = row_count - removed,
        warnings = warnings.len(),
        "promoted rows to header"
    );
    Promoted {
        table: Table::from_columns(columns),
        warnings,
    }
}

use crate::database::cell::Cell;
use crate::database::column::Column;
use crate::database::column::ColumnType;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while assembling a table from columns.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Column '{column}' of type {kind} cannot hold a {cell} value at row {row}")]
    TypeMismatch {
        column: String,
        kind: &'static str,
        cell: &'static str,
        row: usize,
    },

    #[error("Column '{column}' has value '{value}' outside its categories")]
    UnknownCategory { column: String, value: String },
}

/// An in-memory table: ordered columns of equal length.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    columns: Vec<Column>,
}

/// Unvalidated wire shape of a table.
#[derive(Deserialize)]
struct TableData {
    columns: Vec<Column>,
}

impl TryFrom<TableData> for Table {
    type Error = TableError;

    fn try_from(data: TableData) -> Result<Self, Self::Error> {
        Table::new(data.columns)
    }
}

impl Table {
    /// Builds a table, checking that every column has the same length and
    /// that every cell fits its column type.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        let expected = columns.first().map(Column::len).unwrap_or(0);
        for column in &columns {
            if column.len() != expected {
                return Err(TableError::LengthMismatch {
                    column: column.name.to_owned(),
                    expected,
                    actual: column.len(),
                });
            }
            if let Some((row, cell)) = column
                .values
                .iter()
                .enumerate()
                .find(|(_, cell)| !column.kind.accepts(cell))
            {
                return Err(match (&column.kind, cell) {
                    (ColumnType::Categorical(_), Cell::Varchar(value)) => {
                        TableError::UnknownCategory {
                            column: column.name.to_owned(),
                            value: value.to_owned(),
                        }
                    }
                    _ => TableError::TypeMismatch {
                        column: column.name.to_owned(),
                        kind: column.kind.as_str(),
                        cell: cell.type_name(),
                        row,
                    },
                });
            }
        }
        Ok(Table { columns })
    }

    /// Wraps columns already known to satisfy the table invariants.
    pub(crate) fn from_columns(columns: Vec<Column>) -> Self {
        Table { columns }
    }

    /// Number of rows, zero for a table without columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

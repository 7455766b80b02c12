use crate::database::cell::Cell;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashSet;

/// Supported column data types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Boolean values (true/false)
    Boolean,
    /// 64-bit signed integers
    BigInt,
    /// Double-precision floating point numbers
    Double,
    /// Variable-length strings
    Varchar,
    /// Date and time
    Timestamp,
    /// Date without time component
    Date,
    /// Time without date component
    Time,
    /// Strings restricted to an ordered set of categories
    Categorical(Vec<String>),
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::BigInt => "bigint",
            ColumnType::Double => "double",
            ColumnType::Varchar => "varchar",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Categorical(_) => "categorical",
        }
    }

    /// Returns true if a cell may be stored in a column of this type.
    /// Missing cells fit every type; categorical values must be one of the categories.
    pub fn accepts(&self, cell: &Cell) -> bool {
        match (self, cell) {
            (_, Cell::Null) => true,
            (ColumnType::Boolean, Cell::Boolean(_)) => true,
            (ColumnType::BigInt, Cell::BigInt(_)) => true,
            (ColumnType::Double, Cell::Double(_)) => true,
            (ColumnType::Varchar, Cell::Varchar(_)) => true,
            (ColumnType::Timestamp, Cell::Timestamp(_)) => true,
            (ColumnType::Date, Cell::Date(_)) => true,
            (ColumnType::Time, Cell::Time(_)) => true,
            (ColumnType::Categorical(categories), Cell::Varchar(value)) => {
                categories.iter().any(|category| category == value)
            }
            _ => false,
        }
    }
}

/// A named, typed column of a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Column data type
    pub kind: ColumnType,
    /// Values, one per row
    pub values: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnType, values: Vec<Cell>) -> Self {
        Column {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every row whose mask entry is true, keeping the others in order.
    /// `mask` must have one entry per row.
    pub(crate) fn remove_rows(&mut self, mask: &[bool]) {
        let mut rows = mask.iter();
        self.values.retain(|_| !rows.next().copied().unwrap_or(false));
    }

    /// Drops categories that no longer occur in the values. No-op for other types.
    pub(crate) fn prune_categories(&mut self) {
        if let ColumnType::Categorical(categories) = &mut self.kind {
            let present: HashSet<&str> = self
                .values
                .iter()
                .filter_map(|cell| match cell {
                    Cell::Varchar(value) => Some(value.as_str()),
                    _ => None,
                })
                .collect();
            categories.retain(|category| present.contains(category.as_str()));
        }
    }
}

//! # Rows to Header
//!
//! A table transformation step that promotes one or more rows of a table to
//! its column names.
//!
//! ## Features
//!
//! - **Row selectors**: pick header rows with 1-based selectors like `"1-2, 5"`
//! - **Multi-row headers**: cells of several header rows are joined with `" – "`
//! - **Unique names**: duplicate names get numeric suffixes and empty names
//!   become `Column N` placeholders
//! - **Delete above**: optionally drop every row above the last header row
//! - **Categorical columns**: categories no longer used after row removal are pruned
//! - **Host messages**: parse errors and renames are reported as localizable messages
//!
//! ## Entry Points
//!
//! - [`render`]: run the step with the host's parameter object
//! - [`promote`]: run the promotion with an already parsed [`RowSelector`]
//! - [`parse_ranges`]: parse a row selector
//! - [`make_unique`]: make a list of column names unique
pub mod database;
pub mod error;
pub mod extension;
pub mod header;

pub use crate::database::cell::Cell;
pub use crate::database::column::Column;
pub use crate::database::column::ColumnType;
pub use crate::database::range::parse_ranges;
pub use crate::database::range::RangeError;
pub use crate::database::range::RowRange;
pub use crate::database::range::RowSelector;
pub use crate::database::table::Table;
pub use crate::database::table::TableError;
pub use crate::error::RowsToHeaderError;
pub use crate::extension::render;
pub use crate::extension::Message;
pub use crate::extension::Parameters;
pub use crate::extension::RenderResult;
pub use crate::extension::RowsToHeaderParameters;
pub use crate::header::make_unique;
pub use crate::header::promote;
pub use crate::header::Promoted;
pub use crate::header::UniquifyWarning;

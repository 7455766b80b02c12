//! # Table Model
//!
//! Typed cells, columns and tables handed over by the host, and the row
//! selector that picks header rows out of them.
pub mod cell;
pub mod column;
pub mod range;
pub mod table;

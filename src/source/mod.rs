//! Reading CSV test-case sheets.
//!
//! A sheet starts with metadata lines (decision id, DMN file) followed by a
//! regular CSV table. [`header`] reads the metadata and [`rows`] reads the table;
//! the two are independent and each opens the file on its own.
pub mod header;
pub mod rows;

pub use header::*;
pub use rows::*;

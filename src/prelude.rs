//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the kensa crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kensa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let path = Path::new("dmnCSV/loans.csv");
//! let header = ConfHeader::from_file(path)?;
//! let rows = parse_rows(path, METADATA_LINES)?;
//!
//! let document = Compiler::default().compile(&header, &rows);
//! println!("{}", document.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

// Batch orchestration
pub use crate::batch::{
    BatchConfig, BatchReport, FileOutcome, compile_directory, compile_file, compile_sheet,
    write_conf,
};

// Compilation
pub use crate::compiler::{ColumnLayout, Compiler};

// Document model
pub use crate::conf::{
    ColumnMap, ConfDocument, InputDomain, TestCase, TestResult, TypedValue, conf_file_name,
};

// Sheet reading
pub use crate::source::{ConfHeader, METADATA_LINES, Row, parse_rows, parse_rows_from_str};

// Error types
pub use crate::error::{BatchError, CompileError};

// Standard library re-exports commonly used with this crate
pub use std::path::{Path, PathBuf};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
